//! Prefix-grouping parser
//!
//! Turns a flat list of names into a [`Grouping`] by bucketing values on their
//! word-delimited prefix and recursively splitting buckets that are too large.

use std::time::Instant;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::models::{Grouping, Node};
use crate::prefix::prefix_delimited;

/// Default for [`GroupingConfig::min_group_size`]
pub const DEFAULT_MIN_GROUP_SIZE: usize = 3;
/// Default for [`GroupingConfig::ideal_max_group_size`]
pub const DEFAULT_IDEAL_MAX_GROUP_SIZE: usize = 200;
/// Default for [`GroupingConfig::max_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Grouping policy consumed by [`Parser`].
///
/// Deserializes from the `[grouping]` section of a config file; missing keys
/// fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Groups strictly smaller than this do not get their own key.
    pub min_group_size: usize,

    /// Groups larger than this are split one level further.
    pub ideal_max_group_size: usize,

    /// Hard ceiling on splitting depth.
    pub max_depth: usize,

    /// Collect undersized groups under this key instead of the parent's values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc_group_key: Option<String>,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            ideal_max_group_size: DEFAULT_IDEAL_MAX_GROUP_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            misc_group_key: None,
        }
    }
}

impl GroupingConfig {
    pub fn with_min_group_size(mut self, size: usize) -> Self {
        self.min_group_size = size;
        self
    }

    pub fn with_ideal_max_group_size(mut self, size: usize) -> Self {
        self.ideal_max_group_size = size;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_misc_group_key(mut self, key: impl Into<String>) -> Self {
        self.misc_group_key = Some(key.into());
        self
    }

    /// Check the policy, reporting the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::MaxDepth);
        }
        if self.min_group_size < 1 {
            return Err(ConfigError::MinGroupSize);
        }
        if self.ideal_max_group_size < self.min_group_size {
            return Err(ConfigError::MaxGroupSize);
        }
        if self.misc_group_key.as_deref() == Some("") {
            return Err(ConfigError::EmptyMiscKey);
        }
        Ok(())
    }
}

/// Builds prefix groupings under a fixed [`GroupingConfig`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: GroupingConfig,
}

impl Parser {
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Group `values` into a tree.
    ///
    /// Fails only when the config is invalid; blank values are dropped.
    pub fn parse<I, S>(&self, values: I) -> Result<Grouping, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.validate()?;

        let started = Instant::now();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let input_len = values.len();

        let root = self.parse_strings(values, 0);
        debug_assert!(root.check_invariant());

        debug!(
            values = input_len,
            groups = root.groups().len(),
            descendants = root.descendants(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "parsed grouping"
        );

        Ok(Grouping::new(root))
    }

    fn parse_strings(&self, values: Vec<String>, level: usize) -> Node {
        let mut buckets: IndexMap<String, Vec<String>> = IndexMap::new();
        for value in values {
            if value.trim().is_empty() {
                continue;
            }
            let key = prefix_delimited(&value, level).to_string();
            buckets.entry(key).or_default().push(value);
        }

        let mut node = Node::default();
        let mut misc: Vec<String> = Vec::new();

        for (key, group) in buckets {
            if group.len() < self.config.min_group_size {
                if self.config.misc_group_key.is_some() {
                    misc.extend(group);
                } else {
                    node.push_values(group);
                }
            } else if group.len() > self.config.ideal_max_group_size
                && level + 1 < self.config.max_depth
            {
                trace!(key = %key, level, size = group.len(), "splitting group");
                let child = self.parse_strings(group, level + 1);
                node.insert_group(key, child);
            } else {
                node.insert_group(key, Node::leaf(group));
            }
        }

        // The misc bucket is a flat drain and is never split again.
        if let Some(misc_key) = &self.config.misc_group_key {
            if !misc.is_empty() {
                node.absorb_into_group(misc_key.clone(), misc);
            }
        }

        node
    }
}

/// Group `values` with `config`. Shorthand for [`Parser::parse`].
pub fn parse<I, S>(values: I, config: &GroupingConfig) -> Result<Grouping, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new(config.clone()).parse(values)
}
