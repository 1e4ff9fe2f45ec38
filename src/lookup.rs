//! Prefix queries over a built grouping tree
//!
//! All functions are read-only; a tree can be queried from any number of
//! threads at once.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::Node;
use crate::prefix::prefix_delimited;

/// Find the node whose key path matches `prefix` exactly.
///
/// Descends one level at a time, following the first group whose key starts
/// with the query's prefix at that level. Only one branch is ever explored,
/// so sibling keys where one is a prefix of the other (`a`, `ab`) resolve to
/// whichever comes first.
pub fn lookup_node<'a>(root: &'a Node, prefix: &str) -> Option<&'a Node> {
    let mut node = root;
    let mut level = 0;

    loop {
        let this_prefix = prefix_delimited(prefix, level);
        let mut next = None;

        for (key, child) in node.groups() {
            if key == prefix {
                return Some(child);
            }
            if key.starts_with(this_prefix) {
                next = Some(child);
                break;
            }
        }

        node = next?;
        level += 1;
    }
}

/// Collect everything under `root` that starts with `prefix`.
///
/// Groups whose key already starts with `prefix` are shared whole; groups the
/// query is more specific than are searched recursively. Returns `None` when
/// nothing matches.
pub fn lookup<'a>(root: &'a Node, prefix: &str) -> Option<PrefixMatch<'a>> {
    let mut result = PrefixMatch::default();

    for (key, child) in root.groups() {
        if key.starts_with(prefix) {
            result.push_group(key.as_str(), MatchedGroup::Whole(child));
        } else if prefix.starts_with(key.as_str()) {
            if let Some(partial) = lookup(child, prefix) {
                result.push_group(key.as_str(), MatchedGroup::Partial(partial));
            }
        }
    }

    for value in root.values() {
        if value.starts_with(prefix) {
            result.values.push(value.as_str());
            result.descendants += 1;
        }
    }

    if result.groups.is_empty() && result.values.is_empty() {
        None
    } else {
        Some(result)
    }
}

/// Flatten a subtree into its values, depth first.
///
/// A node's own values come before those of its groups.
pub fn collect_values(node: &Node) -> Vec<&str> {
    let mut out = Vec::with_capacity(node.descendants());
    collect_node(node, &mut out);
    out
}

fn collect_node<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    out.extend(node.values().iter().map(String::as_str));
    for child in node.groups().values() {
        collect_node(child, out);
    }
}

/// Result of [`lookup`]: a freshly built node borrowing from the source tree.
///
/// Serializes to the same shape as [`Node`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrefixMatch<'a> {
    groups: IndexMap<&'a str, MatchedGroup<'a>>,
    values: Vec<&'a str>,
    descendants: usize,
}

/// A group inside a [`PrefixMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatchedGroup<'a> {
    /// Source subtree matched in full and is shared as-is
    Whole(&'a Node),
    /// Only part of the source subtree matched
    Partial(PrefixMatch<'a>),
}

impl<'a> PrefixMatch<'a> {
    fn push_group(&mut self, key: &'a str, group: MatchedGroup<'a>) {
        self.descendants += group.descendants();
        self.groups.insert(key, group);
    }

    pub fn groups(&self) -> &IndexMap<&'a str, MatchedGroup<'a>> {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&MatchedGroup<'a>> {
        self.groups.get(key)
    }

    pub fn group_keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    pub fn values(&self) -> &[&'a str] {
        &self.values
    }

    /// Number of matched values in this subtree
    pub fn descendants(&self) -> usize {
        self.descendants
    }

    /// Flatten the match into its values, in tree order.
    pub fn collect_values(&self) -> Vec<&'a str> {
        let mut out = Vec::with_capacity(self.descendants);
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<&'a str>) {
        out.extend(self.values.iter().copied());
        for group in self.groups.values() {
            match group {
                MatchedGroup::Whole(node) => collect_node(*node, out),
                MatchedGroup::Partial(partial) => partial.collect_into(out),
            }
        }
    }

    /// Copy the match into an owned [`Node`].
    pub fn to_node(&self) -> Node {
        let mut node = Node::leaf(self.values.iter().map(|v| v.to_string()).collect());
        for (key, group) in &self.groups {
            node.insert_group(key.to_string(), group.to_node());
        }
        node
    }
}

impl MatchedGroup<'_> {
    pub fn descendants(&self) -> usize {
        match self {
            MatchedGroup::Whole(node) => node.descendants(),
            MatchedGroup::Partial(partial) => partial.descendants(),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            MatchedGroup::Whole(node) => (*node).clone(),
            MatchedGroup::Partial(partial) => partial.to_node(),
        }
    }
}
