#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for level in 0..8 {
            let prefix = groop::prefix_delimited(s, level);
            assert!(s.starts_with(prefix));
        }
    }
});
