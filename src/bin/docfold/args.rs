#[derive(clap::Parser)]
#[command(name = "docfold", version, about, propagate_version = true)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// Validate the site configuration and resolve its references
    Check(crate::check::CheckArgs),
    /// Print the resolved configuration
    Config(crate::debug::ConfigArgs),
}

#[derive(clap::Args)]
pub(crate) struct ConfigFileArgs {
    /// Config file to use [default: _docfold.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<std::path::PathBuf>,
}

impl ConfigFileArgs {
    pub(crate) fn load(&self, cwd: &std::path::Path) -> anyhow::Result<docfold::Config> {
        if let Some(config_path) = self.config.as_deref() {
            Ok(docfold::Config::from_file(config_path)?)
        } else {
            Ok(docfold::Config::from_cwd(cwd)?)
        }
    }
}
