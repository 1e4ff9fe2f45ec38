use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use groop::{render_tree, Config, OutputFormat};

pub fn cmd_tree(
    config: &Config,
    input: Option<&Path>,
    depth: Option<usize>,
    no_values: bool,
) -> Result<ExitCode> {
    let grouping = super::build_grouping(config, input)?;

    match config.output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(grouping.root())?);
        }
        OutputFormat::Text => {
            let mut options = config.output.render_options();
            if depth.is_some() {
                options.max_depth = depth;
            }
            if no_values {
                options.show_values = false;
            }
            print!("{}", render_tree(grouping.root(), &options));
        }
    }

    Ok(ExitCode::SUCCESS)
}
