//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GroopError, GroopResult};

use super::types::{Config, OutputFormat};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "groop.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GroopResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GroopError::InvalidConfigFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        debug!(key = %warning.key, file = %path.display(), "unknown config key");
    }

    Ok((config, warnings))
}

/// Pick the config file to use, load it, and apply environment overrides.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
) -> GroopResult<(Config, Vec<ConfigWarning>)> {
    let chosen = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project_config = project_root.join(PROJECT_CONFIG_FILE);
            let user_config = dirs_config_dir().map(|dir| dir.join("groop/config.toml"));
            std::iter::once(project_config)
                .chain(user_config)
                .find(|candidate| candidate.is_file())
        }
    };

    let (config, warnings) = match chosen {
        Some(path) => {
            debug!(file = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (GROOP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply GROOP_* overrides read through `var`.
///
/// Values that do not parse are skipped with a warning.
pub fn with_env_overrides_from<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let size = |name: &str| -> Option<usize> {
        let raw = var(name)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(var = name, value = %raw, "ignoring non-numeric override");
                None
            }
        }
    };

    // GROOP_MIN_GROUP_SIZE
    if let Some(value) = size("GROOP_MIN_GROUP_SIZE") {
        config.grouping.min_group_size = value;
    }

    // GROOP_IDEAL_MAX_GROUP_SIZE
    if let Some(value) = size("GROOP_IDEAL_MAX_GROUP_SIZE") {
        config.grouping.ideal_max_group_size = value;
    }

    // GROOP_MAX_DEPTH
    if let Some(value) = size("GROOP_MAX_DEPTH") {
        config.grouping.max_depth = value;
    }

    // GROOP_MISC_GROUP_KEY
    if let Some(key) = var("GROOP_MISC_GROUP_KEY") {
        config.grouping.misc_group_key = Some(key);
    }

    // GROOP_FORMAT
    if let Some(format) = var("GROOP_FORMAT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

/// Line of the first `key = ...` assignment or `[key]` table header.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let line = line.trim_start_matches('[').trim_start();
            line.strip_prefix(key).is_some_and(|rest| {
                let rest = rest.trim_start();
                rest.starts_with('=') || rest.starts_with(']') || rest.starts_with('.')
            })
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "grouping",
        "min_group_size",
        "ideal_max_group_size",
        "max_depth",
        "misc_group_key",
        "output",
        "format",
        "max_display_depth",
        "show_values",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b.len()]
}
