//! Fuzz test for the word reader
//!
//! Feeds arbitrary text to the reader to find:
//! - Panics on odd UTF-8 boundaries
//! - Empty or whitespace-bearing words
//! - Infinite loops
//!
//! Run with: cargo +nightly fuzz run reader_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use shroud_core::ParserSettings;
use shroud_dsl::{TextLines, WordReader};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let settings = ParserSettings::default().with_path_separator(':');
        let mut reader = WordReader::new(Box::new(TextLines::new("fuzz.pro", input)), &settings);

        while let Ok(Some(word)) = reader.next_word() {
            assert!(!word.is_empty(), "Words are never empty");
            assert!(
                !word.chars().any(char::is_whitespace),
                "Words never contain whitespace"
            );
            assert!(!word.contains('#'), "Comments never leak into words");
            let _ = reader.location_description();
        }
        let _ = reader.last_comments();
    }
});
