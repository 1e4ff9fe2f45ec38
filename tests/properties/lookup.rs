//! Property tests for prefix queries.

use proptest::prelude::*;

use groop::{lookup, lookup_node, GroupingConfig, Node, Parser};

fn free_names() -> impl Strategy<Value = Vec<String>> {
    let word = proptest::string::string_regex("[a-c]{1,2}").unwrap();
    let name = proptest::collection::vec(word, 1..=4).prop_map(|words| words.join("_"));
    proptest::collection::vec(name, 0..80)
}

/// Names built from fixed-width words, so sibling keys never prefix each other.
fn disjoint_names() -> impl Strategy<Value = Vec<String>> {
    let word = prop::sample::select(vec!["aa", "ab", "ba", "bb", "cc"]);
    let name = proptest::collection::vec(word, 1..=4).prop_map(|words| words.join("_"));
    proptest::collection::vec(name, 0..80)
}

fn config() -> impl Strategy<Value = GroupingConfig> {
    (1usize..4, 0usize..6, 1usize..5).prop_map(|(min, extra, depth)| {
        GroupingConfig::default()
            .with_min_group_size(min)
            .with_ideal_max_group_size(min + extra)
            .with_max_depth(depth)
    })
}

fn query() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c_]{0,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `lookup` finds exactly the input values starting with the prefix.
    #[test]
    fn property_lookup_counts_match_input(
        values in free_names(),
        config in config(),
        prefix in query(),
    ) {
        let grouping = Parser::new(config).parse(values.clone()).unwrap();
        let expected = values.iter().filter(|v| v.starts_with(prefix.as_str())).count();

        match lookup(grouping.root(), &prefix) {
            Some(found) => {
                prop_assert_eq!(found.descendants(), expected);
                prop_assert!(found.collect_values().iter().all(|v| v.starts_with(prefix.as_str())));
                prop_assert!(found.to_node().check_invariant());
            }
            None => prop_assert_eq!(expected, 0),
        }
    }

    /// PROPERTY: every group path is reachable through `lookup_node`.
    ///
    /// Keys equal to their parent's key are shadowed by the parent and skipped.
    #[test]
    fn property_lookup_node_finds_group_paths(values in disjoint_names(), config in config()) {
        let grouping = Parser::new(config).parse(values).unwrap();

        let mut stack: Vec<(&str, &Node)> = vec![("", grouping.root())];
        while let Some((parent_key, node)) = stack.pop() {
            for (key, child) in node.groups() {
                if key != parent_key {
                    let found = lookup_node(grouping.root(), key);
                    prop_assert!(found.is_some(), "no node for {}", key);
                    prop_assert!(std::ptr::eq(found.unwrap(), child), "wrong node for {}", key);
                }
                stack.push((key.as_str(), child));
            }
        }
    }

    /// PROPERTY: lookups never panic on arbitrary queries.
    #[test]
    fn property_lookups_never_panic(values in free_names(), prefix in ".{0,12}") {
        let grouping = Parser::default().parse(values).unwrap();
        let _ = lookup_node(grouping.root(), &prefix);
        let _ = lookup(grouping.root(), &prefix);
    }
}
