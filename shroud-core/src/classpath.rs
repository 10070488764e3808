//! Class path entries

use serde::{Deserialize, Serialize};

/// A jar, zip or directory, with an optional filter on the names it yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPathEntry {
    pub name: String,
    /// Comma-separated name globs, e.g. `"**.class,!**Test.class"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl ClassPathEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Ordered list of class path entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassPath(Vec<ClassPathEntry>);

impl ClassPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ClassPathEntry) {
        self.0.push(entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ClassPathEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassPathEntry> {
        self.0.iter()
    }
}

impl From<Vec<ClassPathEntry>> for ClassPath {
    fn from(entries: Vec<ClassPathEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a ClassPath {
    type Item = &'a ClassPathEntry;
    type IntoIter = std::slice::Iter<'a, ClassPathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
