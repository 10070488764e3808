//! Keep rules: which classes and class members survive shrinking and renaming

use crate::access::AccessFlagSet;
use crate::class_util::METHOD_NAME_INIT;
use serde::{Deserialize, Serialize};

// ============================================================================
// KEEP INTENT
// ============================================================================

/// What a keep rule asks for, independent of what it matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeepIntent {
    /// Mark matching classes themselves.
    pub mark_classes: bool,
    /// Mark matching classes only if all listed members are present.
    pub mark_classes_conditionally: bool,
    /// Only protect names from renaming; shrinking may still remove them.
    pub only_keep_names: bool,
}

impl KeepIntent {
    /// `-keep`
    pub const KEEP: KeepIntent = KeepIntent::new(true, false, false);
    /// `-keepclassmembers`
    pub const KEEP_CLASS_MEMBERS: KeepIntent = KeepIntent::new(false, false, false);
    /// `-keepclasseswithmembers`
    pub const KEEP_CLASSES_WITH_MEMBERS: KeepIntent = KeepIntent::new(false, true, false);
    /// `-keepnames`
    pub const KEEP_NAMES: KeepIntent = KeepIntent::new(true, false, true);
    /// `-keepclassmembernames`
    pub const KEEP_CLASS_MEMBER_NAMES: KeepIntent = KeepIntent::new(false, false, true);
    /// `-keepclasseswithmembernames`
    pub const KEEP_CLASSES_WITH_MEMBER_NAMES: KeepIntent = KeepIntent::new(false, true, true);

    pub const fn new(
        mark_classes: bool,
        mark_classes_conditionally: bool,
        only_keep_names: bool,
    ) -> Self {
        Self {
            mark_classes,
            mark_classes_conditionally,
            only_keep_names,
        }
    }
}

// ============================================================================
// MEMBER SPECIFICATION
// ============================================================================

/// A field or method pattern inside a keep rule.
///
/// `name` and `descriptor` are `None` when any value matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSpec {
    pub access: AccessFlagSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Internal field type or method descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
}

impl MemberSpec {
    /// Any member satisfying the access constraints.
    pub fn any(access: AccessFlagSet) -> Self {
        Self {
            access,
            name: None,
            descriptor: None,
        }
    }

    pub fn named(
        access: AccessFlagSet,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            access,
            name: Some(name.into()),
            descriptor: Some(descriptor.into()),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.name.as_deref() == Some(METHOD_NAME_INIT)
    }
}

// ============================================================================
// KEEP SPECIFICATION
// ============================================================================

/// A single keep rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepSpec {
    /// Class-level modifier constraints.
    pub access: AccessFlagSet,
    /// Internal class name pattern; `None` matches every class.
    pub class_name: Option<String>,
    /// Required superclass or interface, internal form.
    pub extends_class_name: Option<String>,
    /// New name for the matched class, internal form.
    pub as_class_name: Option<String>,
    pub intent: KeepIntent,
    /// Comment lines written right before the rule, kept for reporting
    /// why a class was kept.
    pub comments: Option<String>,
    pub fields: Vec<MemberSpec>,
    pub methods: Vec<MemberSpec>,
}

impl KeepSpec {
    pub fn new(class_name: Option<String>, intent: KeepIntent) -> Self {
        Self {
            class_name,
            intent,
            ..Self::default()
        }
    }

    pub fn with_access(mut self, access: AccessFlagSet) -> Self {
        self.access = access;
        self
    }

    pub fn with_extends(mut self, extends_class_name: impl Into<String>) -> Self {
        self.extends_class_name = Some(extends_class_name.into());
        self
    }

    pub fn with_as(mut self, as_class_name: impl Into<String>) -> Self {
        self.as_class_name = Some(as_class_name.into());
        self
    }

    pub fn with_comments(mut self, comments: Option<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn add_field(&mut self, field: MemberSpec) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: MemberSpec) {
        self.methods.push(method);
    }

    pub fn has_members(&self) -> bool {
        !self.fields.is_empty() || !self.methods.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
