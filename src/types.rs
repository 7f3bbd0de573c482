//! Core type definitions for compile-time safety.
//!
//! Book codes travel through storage and the UI as plain strings; wrapping them
//! keeps them from being mixed up with display names or alias text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical book identifier (e.g. `GEN`, `1CO`, `REV`).
///
/// Codes are normalized to upper case, so `"rom"` and `"ROM"` name the same
/// book. Whether the code actually exists is a question for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BookId(String);

impl BookId {
    /// Create a new `BookId` from a code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// Get the inner code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.0
    }
}

/// Division of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    /// Genesis through Malachi.
    Old,
    /// Matthew through Revelation.
    New,
}

impl Testament {
    /// Returns the human-readable name of this testament.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Old => "Old Testament",
            Self::New => "New Testament",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn book_id_normalizes_case() {
        assert_eq!(BookId::new("rom"), BookId::new("ROM"));
        assert_eq!(BookId::new(" 1co ").as_str(), "1CO");
    }

    #[test]
    fn book_id_serializes_as_plain_string() {
        let id = BookId::new("JHN");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"JHN\"");

        let back: BookId = serde_json::from_str("\"jhn\"").unwrap();
        assert_eq!(back, id);
    }
}
