//! Parser settings

use serde::{Deserialize, Serialize};

/// Deepest chain of nested includes accepted below the root source.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 32;

/// Platform separator between class path entries.
#[cfg(windows)]
pub const DEFAULT_PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const DEFAULT_PATH_SEPARATOR: char = ':';

/// Knobs that change how configuration text is read, not what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Nested include limit; exceeding it is a parse error.
    pub max_include_depth: usize,
    /// Word separating class path entries.
    pub path_separator: char,
    /// Whether `<name>` properties fall back to the process environment.
    pub inherit_environment: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            path_separator: DEFAULT_PATH_SEPARATOR,
            inherit_environment: true,
        }
    }
}

impl ParserSettings {
    /// Read overrides from `SHROUD_*` environment variables.
    ///
    /// Unset or unparsable variables keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_include_depth: std::env::var("SHROUD_MAX_INCLUDE_DEPTH")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.max_include_depth),
            path_separator: std::env::var("SHROUD_PATH_SEPARATOR")
                .ok()
                .and_then(|value| single_char(&value))
                .unwrap_or(defaults.path_separator),
            inherit_environment: std::env::var("SHROUD_INHERIT_ENV")
                .map(|value| value == "true" || value == "1")
                .unwrap_or(defaults.inherit_environment),
        }
    }

    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    pub fn with_inherit_environment(mut self, inherit: bool) -> Self {
        self.inherit_environment = inherit;
        self
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
