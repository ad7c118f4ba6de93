use prep_core::model::{Chapter, Subject};

/// Filtered, sorted chapter list ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterListView {
    pub subject: Subject,
    pub chapters: Vec<Chapter>,
    /// Unfiltered chapter count for the subject, for the
    /// "showing X (filtered from Y)" line.
    pub total_in_subject: usize,
}

impl ChapterListView {
    /// Number of chapters after filtering.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.chapters.len()
    }

    /// True when filtering hid at least one chapter of the subject.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.shown() != self.total_in_subject
    }
}

/// Facet values available for a subject, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectFacets {
    pub classes: Vec<String>,
    pub units: Vec<String>,
}
