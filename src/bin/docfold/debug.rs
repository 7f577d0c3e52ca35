#[derive(clap::Args)]
pub(crate) struct ConfigArgs {
    /// Project directory
    #[arg(default_value = ".")]
    directory: std::path::PathBuf,

    #[command(flatten)]
    config: crate::args::ConfigFileArgs,
}

impl ConfigArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let config = self.config.load(&self.directory)?;
        anstream::print!("{config}");
        Ok(())
    }
}
