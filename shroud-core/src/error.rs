//! Error types for rule-model validation

use thiserror::Error;

/// Violations detected while assembling access-flag sets and member specs.
///
/// These carry no source location; the grammar engine attaches one when it
/// turns them into a parse error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Conflicting access modifiers for '{modifiers}'")]
    ConflictingModifiers { modifiers: String },

    #[error("Invalid method access modifier '{modifiers}' for field")]
    InvalidFieldModifier { modifiers: String },

    #[error("Invalid field access modifier '{modifiers}' for method")]
    InvalidMethodModifier { modifiers: String },
}

/// Result type alias for model validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_modifiers_display() {
        let err = ValidationError::ConflictingModifiers {
            modifiers: "public".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Conflicting"));
        assert!(msg.contains("'public'"));
    }

    #[test]
    fn test_invalid_member_modifier_display() {
        let field = ValidationError::InvalidFieldModifier {
            modifiers: "native".to_string(),
        };
        assert!(field.to_string().contains("for field"));
        assert!(field.to_string().contains("native"));

        let method = ValidationError::InvalidMethodModifier {
            modifiers: "volatile, transient".to_string(),
        };
        assert!(method.to_string().contains("for method"));
        assert!(method.to_string().contains("volatile, transient"));
    }
}
