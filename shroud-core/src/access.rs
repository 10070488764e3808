//! Access-flag bitmasks and the required-set / required-unset pair
//!
//! Bit values follow the class-file format so that matched flags can be
//! compared directly against the access words read from class files.

use crate::error::{ValidationError, ValidationResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ACCESS FLAGS
// ============================================================================

bitflags! {
    /// JVM access modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
    }
}

/// External keyword for every flag, in the order keywords are printed.
const KEYWORDS: [(&str, AccessFlags); 12] = [
    ("public", AccessFlags::PUBLIC),
    ("private", AccessFlags::PRIVATE),
    ("protected", AccessFlags::PROTECTED),
    ("static", AccessFlags::STATIC),
    ("final", AccessFlags::FINAL),
    ("synchronized", AccessFlags::SYNCHRONIZED),
    ("volatile", AccessFlags::VOLATILE),
    ("transient", AccessFlags::TRANSIENT),
    ("native", AccessFlags::NATIVE),
    ("interface", AccessFlags::INTERFACE),
    ("abstract", AccessFlags::ABSTRACT),
    ("strictfp", AccessFlags::STRICT),
];

impl AccessFlags {
    /// Modifiers accepted in front of the `class` / `interface` keyword.
    pub const CLASS_MODIFIERS: AccessFlags = AccessFlags::PUBLIC
        .union(AccessFlags::FINAL)
        .union(AccessFlags::INTERFACE)
        .union(AccessFlags::ABSTRACT);

    /// Modifiers a field may carry.
    pub const FIELD_MODIFIERS: AccessFlags = AccessFlags::PUBLIC
        .union(AccessFlags::PRIVATE)
        .union(AccessFlags::PROTECTED)
        .union(AccessFlags::STATIC)
        .union(AccessFlags::FINAL)
        .union(AccessFlags::VOLATILE)
        .union(AccessFlags::TRANSIENT);

    /// Modifiers a method may carry.
    pub const METHOD_MODIFIERS: AccessFlags = AccessFlags::PUBLIC
        .union(AccessFlags::PRIVATE)
        .union(AccessFlags::PROTECTED)
        .union(AccessFlags::STATIC)
        .union(AccessFlags::FINAL)
        .union(AccessFlags::SYNCHRONIZED)
        .union(AccessFlags::NATIVE)
        .union(AccessFlags::ABSTRACT)
        .union(AccessFlags::STRICT);

    /// All modifiers a class member may carry.
    pub const MEMBER_MODIFIERS: AccessFlags =
        AccessFlags::FIELD_MODIFIERS.union(AccessFlags::METHOD_MODIFIERS);

    /// Look up a keyword in the full modifier vocabulary.
    pub fn from_keyword(word: &str) -> Option<AccessFlags> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, flag)| *flag)
    }

    /// Look up a class-level modifier keyword.
    pub fn from_class_keyword(word: &str) -> Option<AccessFlags> {
        Self::from_keyword(word).filter(|flag| Self::CLASS_MODIFIERS.contains(*flag))
    }

    /// Look up a field or method modifier keyword.
    pub fn from_member_keyword(word: &str) -> Option<AccessFlags> {
        Self::from_keyword(word).filter(|flag| Self::MEMBER_MODIFIERS.contains(*flag))
    }

    /// External keywords of the flags in this set, in canonical order.
    pub fn keywords(self) -> Vec<&'static str> {
        KEYWORDS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(keyword, _)| *keyword)
            .collect()
    }
}

impl Default for AccessFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keywords().join(" "))
    }
}

// Serialized as the raw access word, like the class-file format.
impl Serialize for AccessFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccessFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u16::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid AccessFlags bits: {:#06x}", bits))
        })
    }
}

// ============================================================================
// REQUIRED SET / UNSET PAIR
// ============================================================================

/// Flags that must be present and flags that must be absent.
///
/// `required_set & required_unset` is always empty: [`AccessFlagSet::require`]
/// refuses the assignment that would make them overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessFlagSet {
    pub required_set: AccessFlags,
    pub required_unset: AccessFlags,
}

impl AccessFlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `flag` to be present (`present == true`) or absent.
    pub fn require(&mut self, flag: AccessFlags, present: bool) -> ValidationResult<()> {
        let (set, unset) = if present {
            (self.required_set | flag, self.required_unset)
        } else {
            (self.required_set, self.required_unset | flag)
        };

        let overlap = set & unset;
        if !overlap.is_empty() {
            return Err(ValidationError::ConflictingModifiers {
                modifiers: overlap.keywords().join(", "),
            });
        }

        self.required_set = set;
        self.required_unset = unset;
        Ok(())
    }

    /// Whether no flag has been constrained yet.
    pub fn is_empty(&self) -> bool {
        self.required_set.is_empty() && self.required_unset.is_empty()
    }

    /// Every flag mentioned, whether required or forbidden.
    pub fn mentioned(&self) -> AccessFlags {
        self.required_set | self.required_unset
    }

    /// Ensure only field modifiers are mentioned.
    pub fn check_field(&self) -> ValidationResult<()> {
        let invalid = self.mentioned() - AccessFlags::FIELD_MODIFIERS;
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidFieldModifier {
                modifiers: invalid.keywords().join(", "),
            })
        }
    }

    /// Ensure only method modifiers are mentioned.
    pub fn check_method(&self) -> ValidationResult<()> {
        let invalid = self.mentioned() - AccessFlags::METHOD_MODIFIERS;
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidMethodModifier {
                modifiers: invalid.keywords().join(", "),
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
