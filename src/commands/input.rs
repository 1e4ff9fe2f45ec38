use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read one name per line from `input`, or stdin for `None` / `-`.
pub fn read_names(input: Option<&Path>) -> Result<Vec<String>> {
    let content = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    Ok(content.lines().map(str::to_string).collect())
}
