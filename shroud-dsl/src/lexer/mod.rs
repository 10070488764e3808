//! Lexer module: configuration sources split into words

pub mod scanner;
pub mod source;
pub mod token;

pub use scanner::*;
pub use source::*;
pub use token::*;
