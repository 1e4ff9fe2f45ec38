//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GroopError, GroopResult};
use crate::parser::GroupingConfig;
use crate::render::RenderOptions;

use super::loader::{self, ConfigWarning};

/// Largest `max_depth` accepted from flags, environment or config files.
///
/// Each level of splitting is one level of recursion while building and
/// dropping the tree.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Deepest group level expanded in text output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_display_depth: Option<usize>,

    #[serde(default = "default_true")]
    pub show_values: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            max_display_depth: None,
            show_values: true,
        }
    }
}

impl OutputConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_depth: self.max_display_depth,
            show_values: self.show_values,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grouping: GroupingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GroopResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GroopResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration.
    ///
    /// Uses `explicit` when given, otherwise the first of
    /// `<project_root>/groop.toml` and the user config that exists, then
    /// applies `GROOP_*` environment overrides.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> GroopResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, project_root)
    }

    /// Apply environment variable overrides (GROOP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject settings the CLI refuses to run with.
    ///
    /// Call after every config layer has been applied.
    pub fn check_limits(&self) -> GroopResult<()> {
        if self.grouping.max_depth > MAX_DEPTH_LIMIT {
            return Err(GroopError::DepthLimit {
                depth: self.grouping.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }

    /// Grouping policy for [`crate::Parser`]
    pub fn grouping_config(&self) -> GroupingConfig {
        self.grouping.clone()
    }
}
