use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use groop::{render_values, Config, OutputFormat};

pub fn cmd_values(config: &Config, prefix: &str, input: Option<&Path>) -> Result<ExitCode> {
    let grouping = super::build_grouping(config, input)?;

    let Some(found) = grouping.lookup(prefix) else {
        return Ok(super::no_match(prefix));
    };
    let values = found.collect_values();

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
        OutputFormat::Text => print!("{}", render_values(&values)),
    }

    Ok(ExitCode::SUCCESS)
}
