//! Parse errors

use thiserror::Error;

/// A fatal configuration error. Parsing stops at the first one.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Unexpected or missing word, conflicting or misplaced modifier, invalid
    /// identifier, or bad property reference.
    #[error("{message} {location}")]
    Syntax { message: String, location: String },

    /// A configuration source could not be opened or read.
    #[error("Can't read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn syntax(message: impl Into<String>, location: impl Into<String>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            location: location.into(),
        }
    }

    pub fn io(resource: impl Into<String>, source: std::io::Error) -> Self {
        ParseError::Io {
            resource: resource.into(),
            source,
        }
    }

    /// Where in the input the error was detected.
    pub fn location(&self) -> &str {
        match self {
            ParseError::Syntax { location, .. } => location,
            ParseError::Io { resource, .. } => resource,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }
}

/// Result type alias for parsing.
pub type ParseResult<T> = Result<T, ParseError>;
