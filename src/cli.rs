use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use groop::{Config, OutputFormat, MAX_DEPTH_LIMIT};

/// groop - group flat name lists into a prefix hierarchy
#[derive(Parser, Debug)]
#[command(name = "groop")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Input is one name per line; omit INPUT or pass '-' to read stdin.")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./groop.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub grouping: GroupingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Grouping policy flags; each overrides the config file and environment.
#[derive(Args, Debug, Default)]
pub struct GroupingArgs {
    /// Smallest group that gets its own key
    #[arg(long, global = true, value_name = "N")]
    pub min_group_size: Option<usize>,

    /// Groups larger than this are split further
    #[arg(long, global = true, value_name = "N")]
    pub ideal_max_group_size: Option<usize>,

    /// Maximum splitting depth
    #[arg(long, global = true, value_name = "N", value_parser = parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Collect undersized groups under this key
    #[arg(long, global = true, value_name = "KEY")]
    pub misc_key: Option<String>,
}

/// Parse `--max-depth`, refusing depths the tree builder cannot nest.
fn parse_max_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s
        .parse()
        .map_err(|e| format!("invalid depth '{}': {}", s, e))?;
    if depth > MAX_DEPTH_LIMIT {
        return Err(format!("must be at most {}", MAX_DEPTH_LIMIT));
    }
    Ok(depth)
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse names and print the whole grouping tree
    Tree {
        /// File with one name per line ('-' for stdin)
        input: Option<PathBuf>,

        /// Deepest group level to expand
        #[arg(long)]
        depth: Option<usize>,

        /// Only print groups, not the values they hold
        #[arg(long)]
        no_values: bool,
    },

    /// Print everything under a prefix
    Lookup {
        /// Prefix to search for
        prefix: String,

        /// File with one name per line ('-' for stdin)
        input: Option<PathBuf>,

        /// Only match a group whose key is exactly PREFIX
        #[arg(long)]
        exact: bool,
    },

    /// List every name under a prefix, in tree order
    Values {
        /// Prefix to search for
        prefix: String,

        /// File with one name per line ('-' for stdin)
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Fold global flags into a resolved config.
    pub fn apply_to(&self, config: &mut Config) {
        let grouping = &mut config.grouping;
        if let Some(size) = self.grouping.min_group_size {
            grouping.min_group_size = size;
        }
        if let Some(size) = self.grouping.ideal_max_group_size {
            grouping.ideal_max_group_size = size;
        }
        if let Some(depth) = self.grouping.max_depth {
            grouping.max_depth = depth;
        }
        if let Some(key) = &self.grouping.misc_key {
            grouping.misc_group_key = Some(key.clone());
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
    }
}
