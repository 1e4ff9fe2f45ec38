//! Property tests for tree construction.

use proptest::prelude::*;

use groop::{GroupingConfig, Parser};

/// Short names over a tiny alphabet so prefixes collide often.
fn name() -> impl Strategy<Value = String> {
    let word = proptest::string::string_regex("[a-c]{1,2}").unwrap();
    prop_oneof![
        9 => proptest::collection::vec(word, 1..=4).prop_map(|words| words.join("_")),
        1 => prop_oneof![Just(String::new()), Just("  ".to_string())],
    ]
}

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(name(), 0..80)
}

fn config() -> impl Strategy<Value = GroupingConfig> {
    (1usize..4, 0usize..6, 1usize..5, any::<bool>()).prop_map(|(min, extra, depth, misc)| {
        let config = GroupingConfig::default()
            .with_min_group_size(min)
            .with_ideal_max_group_size(min + extra)
            .with_max_depth(depth);
        if misc {
            config.with_misc_group_key("misc")
        } else {
            config
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every node's count equals its values plus its children's counts.
    #[test]
    fn property_descendant_invariant_holds(values in names(), config in config()) {
        let grouping = Parser::new(config).parse(values).unwrap();
        prop_assert!(grouping.root().check_invariant());
    }

    /// PROPERTY: flattening returns exactly the non-blank input values.
    #[test]
    fn property_collect_values_round_trips(values in names(), config in config()) {
        let grouping = Parser::new(config).parse(values.clone()).unwrap();

        let mut collected = grouping.collect_values();
        prop_assert_eq!(collected.len(), grouping.root().descendants());

        let mut expected: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .collect();
        collected.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(collected, expected);
    }

    /// PROPERTY: every subtree flattens to `descendants` values.
    #[test]
    fn property_every_subtree_round_trips(values in names(), config in config()) {
        let grouping = Parser::new(config).parse(values).unwrap();

        let mut stack = vec![grouping.root()];
        while let Some(node) = stack.pop() {
            prop_assert_eq!(node.collect_values().len(), node.descendants());
            stack.extend(node.groups().values());
        }
    }

    /// PROPERTY: without a misc bucket no kept group is below the minimum size.
    #[test]
    fn property_groups_meet_min_size(values in names(), config in config()) {
        let min = config.min_group_size;
        let misc = config.misc_group_key.clone();
        let grouping = Parser::new(config).parse(values).unwrap();

        let mut stack = vec![grouping.root()];
        while let Some(node) = stack.pop() {
            for (key, child) in node.groups() {
                if Some(key) != misc.as_ref() {
                    prop_assert!(child.descendants() >= min, "group {} too small", key);
                }
                stack.push(child);
            }
        }
    }

    /// PROPERTY: the misc bucket is always a flat leaf.
    #[test]
    fn property_misc_bucket_is_flat(values in names(), config in config()) {
        let grouping = Parser::new(config.with_misc_group_key("misc")).parse(values).unwrap();

        let mut stack = vec![grouping.root()];
        while let Some(node) = stack.pop() {
            if let Some(misc) = node.group("misc") {
                prop_assert!(misc.groups().is_empty());
            }
            stack.extend(node.groups().values());
        }
    }

    /// PROPERTY: parsing the same input twice yields the same tree.
    #[test]
    fn property_parse_is_deterministic(values in names(), config in config()) {
        let parser = Parser::new(config);
        prop_assert_eq!(parser.parse(values.clone()).unwrap(), parser.parse(values).unwrap());
    }

    /// PROPERTY: arbitrary input never panics under the default config.
    #[test]
    fn property_parse_never_panics(values in proptest::collection::vec(".{0,24}", 0..40)) {
        let grouping = Parser::default().parse(values).unwrap();
        prop_assert!(grouping.root().check_invariant());
    }
}
