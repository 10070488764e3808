//! The aggregate configuration produced by parsing

use crate::classpath::ClassPath;
use crate::keep::KeepSpec;
use serde::{Deserialize, Serialize};

/// Everything a configuration can set.
///
/// String options use `Some("")` for "enabled without an argument", which for
/// the printing options means standard output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    // Class paths (None until the first directive for them)
    pub in_jars: Option<ClassPath>,
    pub out_jars: Option<ClassPath>,
    pub library_jars: Option<ClassPath>,
    pub resource_jars: Option<ClassPath>,

    // Keep rules, in declaration order
    pub keep: Vec<KeepSpec>,

    /// Optional attributes to retain: `None` keeps none, an empty list keeps
    /// all of them.
    pub keep_attributes: Option<Vec<String>>,

    // Optional-argument options
    pub new_source_file_attribute: Option<String>,
    pub print_seeds: Option<String>,
    pub print_usage: Option<String>,
    pub print_mapping: Option<String>,
    pub apply_mapping: Option<String>,
    pub dump: Option<String>,
    /// Internal package name that renamed classes are moved into.
    pub default_package: Option<String>,

    // Switches
    pub verbose: bool,
    pub ignore_warnings: bool,
    pub warn: bool,
    pub note: bool,
    pub shrink: bool,
    pub obfuscate: bool,
    pub use_mixed_case_class_names: bool,
    pub overload_aggressively: bool,
    pub skip_non_public_library_classes: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            in_jars: None,
            out_jars: None,
            library_jars: None,
            resource_jars: None,
            keep: Vec::new(),
            keep_attributes: None,
            new_source_file_attribute: None,
            print_seeds: None,
            print_usage: None,
            print_mapping: None,
            apply_mapping: None,
            dump: None,
            default_package: None,
            verbose: false,
            ignore_warnings: false,
            warn: true,
            note: true,
            shrink: true,
            obfuscate: true,
            use_mixed_case_class_names: true,
            overload_aggressively: false,
            skip_non_public_library_classes: true,
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the optional attribute `name` should be retained.
    pub fn retains_attribute(&self, name: &str) -> bool {
        match &self.keep_attributes {
            None => false,
            Some(names) if names.is_empty() => true,
            Some(names) => names.iter().any(|kept| kept == name),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert!(config.shrink);
        assert!(config.obfuscate);
        assert!(config.warn);
        assert!(config.note);
        assert!(config.use_mixed_case_class_names);
        assert!(config.skip_non_public_library_classes);
        assert!(!config.verbose);
        assert!(!config.ignore_warnings);
        assert!(!config.overload_aggressively);
        assert!(config.keep.is_empty());
        assert!(config.in_jars.is_none());
    }

    #[test]
    fn test_retains_attribute() {
        let mut config = Configuration::default();
        assert!(!config.retains_attribute("SourceFile"));

        config.keep_attributes = Some(vec![]);
        assert!(config.retains_attribute("SourceFile"));

        config.keep_attributes = Some(vec!["LineNumberTable".to_string()]);
        assert!(config.retains_attribute("LineNumberTable"));
        assert!(!config.retains_attribute("SourceFile"));
    }

    #[test]
    fn test_serde_fills_missing_fields_with_defaults() {
        let config: Configuration = serde_json::from_str(r#"{"verbose": true}"#).unwrap();
        assert!(config.verbose);
        assert!(config.shrink);
        assert_eq!(config.keep_attributes, None);
    }
}
