use clap::Parser as _;
use proc_exit::prelude::*;

mod args;
mod check;
mod debug;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let args = args::Args::parse();
    args.color.write_global();
    init_logging(args.verbose.log_level_filter());

    match &args.command {
        args::Command::Check(cmd) => cmd.run().with_code(proc_exit::Code::FAILURE)?,
        args::Command::Config(cmd) => cmd.run().with_code(proc_exit::Code::FAILURE)?,
    }

    proc_exit::Code::SUCCESS.ok()
}

fn init_logging(level: log::LevelFilter) {
    if level == log::LevelFilter::Off {
        return;
    }
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format_timestamp(None);
    builder.format_target(false);
    builder.init();
}
