//! Property tests for word-delimited prefixes.

use proptest::prelude::*;

use groop::{is_word_char, prefix_delimited};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the result is always a prefix of the input.
    #[test]
    fn property_result_is_a_prefix(s in ".{0,40}", level in 0usize..8) {
        prop_assert!(s.starts_with(prefix_delimited(&s, level)));
    }

    /// PROPERTY: deeper levels never give shorter prefixes.
    #[test]
    fn property_levels_grow(s in ".{0,40}", level in 0usize..8) {
        let shallow = prefix_delimited(&s, level);
        let deep = prefix_delimited(&s, level + 1);
        prop_assert!(deep.starts_with(shallow));
    }

    /// PROPERTY: a prefix contains exactly `level` delimiters unless it is the whole input.
    #[test]
    fn property_delimiter_count(s in "[a-zé_.-]{0,30}", level in 0usize..6) {
        let prefix = prefix_delimited(&s, level);
        let delimiters = prefix.chars().filter(|c| !is_word_char(*c)).count();
        if prefix.len() < s.len() {
            prop_assert_eq!(delimiters, level);
        } else {
            prop_assert!(delimiters <= level);
        }
    }
}
