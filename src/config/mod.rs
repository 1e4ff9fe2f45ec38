//! Configuration module for groop
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GROOP_*)
//! 3. Explicit `--config` file
//! 4. Project config (./groop.toml)
//! 5. User config (~/.config/groop/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, with_env_overrides_from, ConfigWarning};
pub use types::{Config, OutputConfig, OutputFormat, MAX_DEPTH_LIMIT};
