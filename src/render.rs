//! Plain-text rendering of grouping trees.
//!
//! One line per group (`key (descendants)`), two spaces of indent per level,
//! directly-owned values listed as `- value` above their node's groups.

use crate::models::Node;

/// Marker appended to groups whose children were cut off by `max_depth`
const TRUNCATED: &str = " …";

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest group level that is expanded (0 = top-level groups only)
    pub max_depth: Option<usize>,
    /// List values under their node
    pub show_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_values: true,
        }
    }
}

/// Render the groups and values below `node`.
pub fn render_tree(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::new();
    render_node(&mut out, node, 0, options);
    out
}

fn render_node(out: &mut String, node: &Node, depth: usize, options: &RenderOptions) {
    let indent = "  ".repeat(depth);

    if options.show_values {
        for value in node.values() {
            out.push_str(&format!("{}- {}\n", indent, value));
        }
    }

    let expanded = options.max_depth.map_or(true, |max| depth < max);
    for (key, child) in node.groups() {
        let marker = if !expanded && !child.groups().is_empty() {
            TRUNCATED
        } else {
            ""
        };
        out.push_str(&format!(
            "{}{} ({}){}\n",
            indent,
            key,
            child.descendants(),
            marker
        ));
        if expanded {
            render_node(out, child, depth + 1, options);
        }
    }
}

/// Render a flat value list, one per line.
pub fn render_values<S: AsRef<str>>(values: &[S]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(value.as_ref());
        out.push('\n');
    }
    out
}
