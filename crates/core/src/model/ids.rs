use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a Chapter.
///
/// Stable across reloads. Data sets that carry no explicit id fall back to
/// the chapter display name, which is unique within a subject.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChapterId(String);

impl ChapterId {
    /// Creates a new `ChapterId` from an explicit identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives an id from the chapter display name (fallback identity key).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChapterId({})", self.0)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_id_display() {
        let id = ChapterId::new("phy-001");
        assert_eq!(id.to_string(), "phy-001");
    }

    #[test]
    fn chapter_id_from_name_matches_explicit() {
        let from_name = ChapterId::from_name("Rotational Motion");
        let explicit = ChapterId::new("Rotational Motion");
        assert_eq!(from_name, explicit);
    }

    #[test]
    fn chapter_id_debug_is_labelled() {
        let id = ChapterId::new("chem-4");
        assert_eq!(format!("{id:?}"), "ChapterId(chem-4)");
    }
}
