//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RefName`] - Fully qualified Git reference name
//!
//! # Validation
//!
//! Unlike most newtypes, [`RefName`] performs no content validation: the
//! pipeline treats field contents as opaque text produced by `git branch
//! --format`, and git has already enforced its refname rules on them. The
//! newtype exists so that reference names cannot be confused with the other
//! free-text fields of a record.
//!
//! # Examples
//!
//! ```
//! use git_br::core::types::RefName;
//!
//! let name = RefName::new("refs/heads/feature/foo");
//! assert_eq!(name.as_str(), "refs/heads/feature/foo");
//! ```

use serde::Serialize;
use std::fmt;

/// A fully qualified Git reference name, e.g. `refs/heads/main`.
///
/// This is the identity key of a branch record: unique within a single run,
/// and the value upstream pointers are matched against. Contents are opaque
/// text; equality and hashing are byte-wise. Serialization is write-only,
/// for the JSON output mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RefName(String);

impl RefName {
    /// Create a new ref name from opaque text.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the ref name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RefName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RefName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
