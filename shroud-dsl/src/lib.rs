//! SHROUD DSL - Keep-rule configuration reader, parser & pretty printer
//!
//! Configurations come from command-line arguments, files (possibly
//! including other files) or in-memory text, and are parsed into a
//! [`shroud_core::Configuration`].
//!
//! Architecture:
//! ```text
//! Line sources (arguments, files, text, urls)
//!     ↓
//! WordReader (words, comments, include stack)
//!     ↓
//! ConfigurationParser (one word of lookahead, directive dispatch)
//!     ↓
//! Configuration
//!     ↓
//! Pretty printer (for round-trip testing)
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty_printer;
pub mod properties;

// Re-export key types for convenience
pub use error::{ParseError, ParseResult};
pub use lexer::{ArgumentLines, FileLines, LineSource, TextLines, WordReader};
pub use parser::{ConfigurationParser, Directive};
pub use pretty_printer::{pretty_print, pretty_print_with_separator, round_trip};
pub use properties::{Properties, PropertyError};

#[cfg(feature = "remote")]
pub use lexer::RemoteLines;

use shroud_core::{Configuration, ParserSettings};

/// Parse command-line arguments into a fresh configuration.
pub fn parse_args<I, S>(args: I, settings: &ParserSettings) -> ParseResult<Configuration>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = Configuration::default();
    ConfigurationParser::from_args(args, settings)?.parse(&mut config)?;
    Ok(config)
}

/// Parse configuration text into a fresh configuration.
pub fn parse_text(name: &str, text: &str, settings: &ParserSettings) -> ParseResult<Configuration> {
    let mut config = Configuration::default();
    ConfigurationParser::from_text(name, text, settings)?.parse(&mut config)?;
    Ok(config)
}
