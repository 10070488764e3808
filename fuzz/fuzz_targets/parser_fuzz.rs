//! Fuzz test for the configuration parser
//!
//! Arguments are separated by NUL bytes. The parser must return either a
//! configuration or a located error, never panic.
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use shroud_core::{Configuration, ParserSettings};
use shroud_dsl::{pretty_print, ConfigurationParser, Properties};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Includes are refused, so no included file is ever read.
        let settings = ParserSettings::default()
            .with_max_include_depth(0)
            .with_inherit_environment(false);
        let args = input.split('\0');

        let mut config = Configuration::default();
        let result = ConfigurationParser::from_args(args, &settings).and_then(|parser| {
            parser
                .with_properties(Properties::new().with("home", "/home/fuzz"))
                .parse(&mut config)
        });

        match result {
            Ok(()) => {
                let _ = pretty_print(&config);
            }
            Err(err) => {
                assert!(!err.to_string().is_empty(), "Errors always carry a message");
            }
        }
    }
});
