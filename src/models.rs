//! Grouping tree data model
//!
//! A [`Grouping`] owns a single root [`Node`]; every node owns its children.
//! Trees are built once by [`crate::Parser`] and never mutated afterwards.

use indexmap::IndexMap;
use serde::Serialize;

/// One level of the grouping hierarchy.
///
/// `groups` keeps insertion order, which is the order in which prefixes were
/// first seen in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    groups: IndexMap<String, Node>,
    values: Vec<String>,
    descendants: usize,
}

impl Node {
    /// Leaf node holding `values` directly.
    pub(crate) fn leaf(values: Vec<String>) -> Self {
        let descendants = values.len();
        Self {
            groups: IndexMap::new(),
            values,
            descendants,
        }
    }

    /// Append values owned directly by this node.
    pub(crate) fn push_values(&mut self, values: impl IntoIterator<Item = String>) {
        for value in values {
            self.values.push(value);
            self.descendants += 1;
        }
    }

    /// Attach a child group, accumulating its descendant count.
    pub(crate) fn insert_group(&mut self, key: String, child: Node) {
        self.descendants += child.descendants;
        if let Some(replaced) = self.groups.insert(key, child) {
            self.descendants -= replaced.descendants;
        }
    }

    /// Append `values` to the group at `key`, creating it when missing.
    pub(crate) fn absorb_into_group(&mut self, key: String, values: Vec<String>) {
        self.descendants += values.len();
        self.groups.entry(key).or_default().push_values(values);
    }

    /// Child groups in insertion order
    pub fn groups(&self) -> &IndexMap<String, Node> {
        &self.groups
    }

    /// Values owned directly by this node
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values in this node's whole subtree
    pub fn descendants(&self) -> usize {
        self.descendants
    }

    /// Child group registered under `key`
    pub fn group(&self, key: &str) -> Option<&Node> {
        self.groups.get(key)
    }

    /// Keys of the child groups, in order
    pub fn group_keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.values.is_empty()
    }

    /// Flatten this subtree back into a list of values (depth first).
    pub fn collect_values(&self) -> Vec<&str> {
        crate::lookup::collect_values(self)
    }

    /// Whether `descendants == values + sum(child descendants)` holds for
    /// every node of this subtree.
    pub fn check_invariant(&self) -> bool {
        let from_children: usize = self.groups.values().map(Node::descendants).sum();
        self.descendants == self.values.len() + from_children
            && self.groups.values().all(Node::check_invariant)
    }
}

/// Result of parsing a batch of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grouping {
    root: Node,
}

impl Grouping {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// See [`crate::lookup::lookup_node`].
    pub fn lookup_node(&self, prefix: &str) -> Option<&Node> {
        crate::lookup::lookup_node(&self.root, prefix)
    }

    /// See [`crate::lookup::lookup`].
    pub fn lookup(&self, prefix: &str) -> Option<crate::lookup::PrefixMatch<'_>> {
        crate::lookup::lookup(&self.root, prefix)
    }

    /// Every value in the tree, in tree order.
    pub fn collect_values(&self) -> Vec<&str> {
        crate::lookup::collect_values(&self.root)
    }
}
