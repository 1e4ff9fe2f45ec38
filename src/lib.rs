//! groop - prefix grouping for large flat name lists
//!
//! groop takes a flat list of names (metric names, keys, identifiers) and
//! organizes it into a browsable hierarchy by recursively grouping on shared
//! word prefixes. The resulting tree is immutable and can be queried by exact
//! key path ([`lookup_node`]), by arbitrary prefix ([`lookup`]) or flattened
//! back into a list ([`collect_values`]).
//!
//! ```
//! use groop::{GroupingConfig, Parser};
//!
//! let config = GroupingConfig::default()
//!     .with_min_group_size(2)
//!     .with_ideal_max_group_size(10);
//! let grouping = Parser::new(config)
//!     .parse(["go_goroutines", "go_threads", "up"])
//!     .unwrap();
//!
//! let go = grouping.lookup_node("go").unwrap();
//! assert_eq!(go.descendants(), 2);
//! assert_eq!(grouping.root().values(), &["up"]);
//! ```

pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod parser;
pub mod prefix;
pub mod render;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, OutputConfig, OutputFormat, MAX_DEPTH_LIMIT};
pub use error::{ConfigError, GroopError, GroopResult};
pub use lookup::{collect_values, lookup, lookup_node, MatchedGroup, PrefixMatch};
pub use models::{Grouping, Node};
pub use parser::{parse, GroupingConfig, Parser};
pub use prefix::{is_word_char, prefix_delimited};
pub use render::{render_tree, render_values, RenderOptions};
