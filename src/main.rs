use std::process::ExitCode;

use clap::Parser;

use paintcore::cli::{self, CliArgs};
use paintcore::logger;

fn main() -> ExitCode {
    logger::init();
    let args = CliArgs::parse();
    cli::run(&args)
}
