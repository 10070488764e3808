//! `<name>` property references in file names and filters

use crate::lexer::{CLOSE_SYSTEM_PROPERTY, OPEN_SYSTEM_PROPERTY};
use shroud_core::DEFAULT_PATH_SEPARATOR;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from [`Properties::replace`]. The parser appends the location.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Expecting closing '>' after opening '<'")]
    UnterminatedProperty,

    #[error("Value of system property '{name}' is undefined")]
    UndefinedProperty { name: String },
}

/// Property table used for `<name>` substitution.
///
/// Explicit entries win over the environment, which is only consulted when
/// inheritance is enabled.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: HashMap<String, String>,
    inherit_environment: bool,
}

impl Properties {
    /// An empty table that ignores the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host-derived entries plus environment inheritance.
    pub fn system() -> Self {
        let mut properties = Self::new().with_inherit_environment(true);
        if let Ok(dir) = std::env::current_dir() {
            properties.set("user.dir", dir.display().to_string());
        }
        if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            properties.set("user.home", home.to_string_lossy().into_owned());
        }
        properties.set("file.separator", std::path::MAIN_SEPARATOR.to_string());
        properties.set("path.separator", DEFAULT_PATH_SEPARATOR.to_string());
        properties
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_inherit_environment(mut self, inherit: bool) -> Self {
        self.inherit_environment = inherit;
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned().or_else(|| {
            if self.inherit_environment {
                std::env::var(name).ok()
            } else {
                None
            }
        })
    }

    /// Replace every `<name>` in `word` with its value.
    ///
    /// Scanning resumes after the inserted value, so values are never
    /// expanded themselves.
    pub fn replace(&self, word: &str) -> Result<String, PropertyError> {
        let mut result = word.to_string();
        let mut from = 0;

        while let Some(offset) = result[from..].find(OPEN_SYSTEM_PROPERTY) {
            let open = from + offset;
            let close = result[open + 1..]
                .find(CLOSE_SYSTEM_PROPERTY)
                .map(|offset| open + 1 + offset)
                .ok_or(PropertyError::UnterminatedProperty)?;

            let name = &result[open + 1..close];
            let value = self
                .get(name)
                .ok_or_else(|| PropertyError::UndefinedProperty {
                    name: name.to_string(),
                })?;

            result.replace_range(open..=close, &value);
            from = open + value.len();
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_without_references() {
        let properties = Properties::new();
        assert_eq!(properties.replace("lib/rt.jar").unwrap(), "lib/rt.jar");
    }

    #[test]
    fn test_replace_known_property() {
        let properties = Properties::new().with("java.home", "/usr/lib/jvm");
        assert_eq!(
            properties.replace("<java.home>/lib/rt.jar").unwrap(),
            "/usr/lib/jvm/lib/rt.jar"
        );
    }

    #[test]
    fn test_replace_several_properties() {
        let properties = Properties::new().with("a", "x").with("b", "yy");
        assert_eq!(properties.replace("<a>-<b>-<a>").unwrap(), "x-yy-x");
    }

    #[test]
    fn test_unterminated_property() {
        let properties = Properties::new().with("a", "x");
        assert_eq!(
            properties.replace("<a>/<b"),
            Err(PropertyError::UnterminatedProperty)
        );
    }

    #[test]
    fn test_undefined_property() {
        let err = Properties::new().replace("<missing>/x").unwrap_err();
        assert_eq!(
            err,
            PropertyError::UndefinedProperty {
                name: "missing".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Value of system property 'missing' is undefined"
        );
    }

    #[test]
    fn test_inserted_value_is_not_rescanned() {
        let properties = Properties::new().with("loop", "<loop>").with("lt", "<");
        assert_eq!(properties.replace("<loop>").unwrap(), "<loop>");
        assert_eq!(properties.replace("a<lt>b").unwrap(), "a<b");
    }

    #[test]
    fn test_explicit_entries_shadow_environment() {
        let properties = Properties::new()
            .with_inherit_environment(true)
            .with("PATH", "explicit");
        assert_eq!(properties.get("PATH").as_deref(), Some("explicit"));
        assert_eq!(Properties::new().get("PATH"), None);
    }

    #[test]
    fn test_system_properties() {
        let properties = Properties::system();
        assert!(properties.get("user.dir").is_some());
        assert_eq!(
            properties.get("file.separator"),
            Some(std::path::MAIN_SEPARATOR.to_string())
        );
    }
}
