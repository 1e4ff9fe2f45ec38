//! Error types for groop
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for groop operations
pub type GroopResult<T> = Result<T, GroopError>;

/// Rejected grouping configuration.
///
/// Raised by [`crate::Parser::parse`] before any input is looked at.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max depth must be > 0")]
    MaxDepth,

    #[error("min group size must be > 0")]
    MinGroupSize,

    #[error("max group size must be >= min group size")]
    MaxGroupSize,

    #[error("miscGroupKey cannot be empty")]
    EmptyMiscKey,
}

/// Main error type for groop operations
#[derive(Error, Debug)]
pub enum GroopError {
    /// Grouping configuration failed validation
    #[error("invalid grouping config: {0}")]
    Config(#[from] ConfigError),

    /// Grouping depth beyond what the tree builder can nest safely
    #[error("max depth {depth} exceeds the limit of {limit}")]
    DepthLimit { depth: usize, limit: usize },

    /// Config file could not be parsed
    #[error("invalid config file {file}: {message}")]
    InvalidConfigFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
