//! Subcommand implementations.
//!
//! Each command reads its input, parses it under the resolved config and
//! writes the result to stdout in the configured format.

mod input;
mod lookup;
mod tree;
mod values;

use std::process::ExitCode;

use anyhow::{Context, Result};

use groop::{Config, Grouping, Parser};

use crate::cli::{Cli, Commands};

pub use input::read_names;

/// Exit status when a prefix matched nothing
pub const EXIT_NO_MATCH: u8 = 1;

pub fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let (mut config, warnings) = Config::resolve(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        eprintln!("{}", warning);
    }
    cli.apply_to(&mut config);
    config.check_limits()?;

    match cli.command {
        Commands::Tree {
            input,
            depth,
            no_values,
        } => tree::cmd_tree(&config, input.as_deref(), depth, no_values),
        Commands::Lookup {
            prefix,
            input,
            exact,
        } => lookup::cmd_lookup(&config, &prefix, input.as_deref(), exact),
        Commands::Values { prefix, input } => {
            values::cmd_values(&config, &prefix, input.as_deref())
        }
    }
}

/// Read and parse the input names under `config`.
fn build_grouping(config: &Config, input: Option<&std::path::Path>) -> Result<Grouping> {
    let names = read_names(input)?;
    let grouping = Parser::new(config.grouping_config())
        .parse(names)
        .context("cannot group input")?;
    Ok(grouping)
}

fn no_match(prefix: &str) -> ExitCode {
    eprintln!("no match for '{}'", prefix);
    ExitCode::from(EXIT_NO_MATCH)
}
