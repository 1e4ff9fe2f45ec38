use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use groop::{render_tree, Config, Node, OutputFormat};

pub fn cmd_lookup(
    config: &Config,
    prefix: &str,
    input: Option<&Path>,
    exact: bool,
) -> Result<ExitCode> {
    let grouping = super::build_grouping(config, input)?;

    let found: Option<Node> = if exact {
        grouping.lookup_node(prefix).cloned()
    } else {
        grouping.lookup(prefix).map(|m| m.to_node())
    };

    let Some(node) = found else {
        return Ok(super::no_match(prefix));
    };
    tracing::info!(prefix, descendants = node.descendants(), "lookup matched");

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&node)?),
        OutputFormat::Text => print!("{}", render_tree(&node, &config.output.render_options())),
    }

    Ok(ExitCode::SUCCESS)
}
