//! Literal words of the configuration language

// ============================================================================
// DIRECTIVE BOUNDARIES
// ============================================================================

/// Every option word starts with this prefix.
pub const OPTION_PREFIX: &str = "-";

/// Short form of the include directive.
pub const AT_DIRECTIVE: &str = "@";

/// Starts a comment that runs to the end of the line.
pub const COMMENT_CHARACTER: char = '#';

// ============================================================================
// KEEP RULE KEYWORDS
// ============================================================================

pub const NEGATOR_KEYWORD: &str = "!";
pub const CLASS_KEYWORD: &str = "class";
pub const INTERFACE_KEYWORD: &str = "interface";
pub const ANY_CLASS_KEYWORD: &str = "*";
pub const IMPLEMENTS_KEYWORD: &str = "implements";
pub const EXTENDS_KEYWORD: &str = "extends";
pub const AS_KEYWORD: &str = "as";

pub const OPEN_KEYWORD: &str = "{";
pub const CLOSE_KEYWORD: &str = "}";
pub const ANY_CLASS_MEMBER_KEYWORD: &str = "*";
pub const ANY_FIELD_KEYWORD: &str = "<fields>";
pub const ANY_METHOD_KEYWORD: &str = "<methods>";

pub const OPEN_ARGUMENTS_KEYWORD: &str = "(";
pub const ARGUMENT_SEPARATOR_KEYWORD: &str = ",";
pub const CLOSE_ARGUMENTS_KEYWORD: &str = ")";
pub const SEPARATOR_KEYWORD: &str = ";";

// ============================================================================
// ATTRIBUTES AND PROPERTIES
// ============================================================================

pub const ANY_ATTRIBUTE_KEYWORD: &str = "*";
pub const ATTRIBUTE_SEPARATOR_KEYWORD: &str = ",";

pub const OPEN_SYSTEM_PROPERTY: char = '<';
pub const CLOSE_SYSTEM_PROPERTY: char = '>';

/// Characters that always form a word of their own. The class path separator
/// is added per reader, since it depends on the platform.
pub const DELIMITERS: [char; 7] = ['@', '{', '}', '(', ')', ',', ';'];

/// Whether `c` is a single-character word for a reader using `path_separator`.
pub fn is_delimiter(c: char, path_separator: char) -> bool {
    c == path_separator || DELIMITERS.contains(&c)
}

/// Split a leading negator off a modifier word: `!public` -> (`public`, false).
pub fn strip_negator(word: &str) -> (&str, bool) {
    match word.strip_prefix(NEGATOR_KEYWORD) {
        Some(stripped) => (stripped, false),
        None => (word, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        for c in ['@', '{', '}', '(', ')', ',', ';', ':'] {
            assert!(is_delimiter(c, ':'), "{c} should delimit");
        }
        assert!(!is_delimiter(':', ';'));
        assert!(!is_delimiter('<', ':'));
        assert!(!is_delimiter('!', ':'));
    }

    #[test]
    fn test_strip_negator() {
        assert_eq!(strip_negator("!final"), ("final", false));
        assert_eq!(strip_negator("final"), ("final", true));
        assert_eq!(strip_negator("!"), ("", false));
    }
}
