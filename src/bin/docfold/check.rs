use docfold::check;
use docfold::site::SiteTree;

#[derive(clap::Args)]
pub(crate) struct CheckArgs {
    /// Project directory to check
    #[arg(default_value = ".")]
    directory: std::path::PathBuf,

    #[command(flatten)]
    config: crate::args::ConfigFileArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let config = self.config.load(&self.directory)?;
        config.validate()?;

        let site = SiteTree::scan(&config)?;
        let report = check::check(&config, &site)?;
        report.log();

        let fatal = report.fatal_count();
        if fatal > 0 {
            anyhow::bail!("{fatal} broken reference(s)");
        }
        Ok(())
    }
}
