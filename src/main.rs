//! groop CLI - group flat name lists into a prefix hierarchy
//!
//! Usage: groop [OPTIONS] <COMMAND>
//!
//! Commands:
//!   tree    Parse names and print the whole grouping tree
//!   lookup  Print everything under a prefix
//!   values  List every name under a prefix

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
