//! filesum - Sum the integers in a text file, or view its raw content

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use filesum::cli;
use filesum::logging;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);
    cli::run(cli)
}
