//! Common test utilities for groop integration tests.
//!
//! This module provides:
//! - The Prometheus-style metric name fixture
//! - Grouping configs used across scenarios
//! - `groop()`: the CLI binary with an isolated environment

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use groop::GroupingConfig;

/// 100 metric names, sorted; 41 of them start with "agent".
pub const METRIC_NAMES: &str = include_str!("../fixtures/metric_names.txt");

pub fn metric_names() -> Vec<&'static str> {
    METRIC_NAMES.lines().collect()
}

/// `min_group_size = 3`, `ideal_max_group_size = 5`, default depth.
pub fn small_config() -> GroupingConfig {
    GroupingConfig::default()
        .with_min_group_size(3)
        .with_ideal_max_group_size(5)
}

/// Write the metric fixture into `dir` and return its path.
pub fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("names.txt");
    fs::write(&path, METRIC_NAMES).unwrap();
    path
}

/// The groop binary, run from `cwd` with no user config or GROOP_* overrides.
pub fn groop(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_groop"));
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("GROOP_MIN_GROUP_SIZE")
        .env_remove("GROOP_IDEAL_MAX_GROUP_SIZE")
        .env_remove("GROOP_MAX_DEPTH")
        .env_remove("GROOP_MISC_GROUP_KEY")
        .env_remove("GROOP_FORMAT");
    cmd
}
