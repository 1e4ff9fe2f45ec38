#![no_main]

use libfuzzer_sys::fuzz_target;

use groop::{lookup, GroupingConfig, Parser};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // First line is the query, the rest are names; small groups force deep trees
        let mut lines = content.lines();
        let query = lines.next().unwrap_or_default();

        let config = GroupingConfig::default()
            .with_min_group_size(1)
            .with_ideal_max_group_size(2)
            .with_max_depth(8);
        let grouping = Parser::new(config).parse(lines).unwrap();

        assert!(grouping.root().check_invariant());
        assert_eq!(grouping.collect_values().len(), grouping.root().descendants());
        let _ = grouping.lookup_node(query);
        if let Some(found) = lookup(grouping.root(), query) {
            assert_eq!(found.collect_values().len(), found.descendants());
        }
    }
});
