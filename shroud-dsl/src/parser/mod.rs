//! Parser module: directives, lookahead and the keep-rule grammar

pub mod directive;
pub mod keep;
pub mod lookahead;
pub mod parser;

pub use directive::*;
pub use lookahead::Lookahead;
pub use parser::ConfigurationParser;
