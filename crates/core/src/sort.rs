//! Sort engine: stable ordering of a chapter sequence by a selected field.

use std::cmp::Ordering;

use crate::model::{Chapter, SortDirection, SortField, SortOption};

/// Orders the chapters by the resolved comparison key.
///
/// Descending reverses the comparator itself rather than reversing the
/// ascending result: equal keys compare `Equal` in both directions, so the
/// underlying stable sort keeps them in input order either way.
#[must_use]
pub fn sort_chapters(mut chapters: Vec<Chapter>, sort: SortOption) -> Vec<Chapter> {
    chapters.sort_by(|a, b| {
        let ordering = compare_by(sort.field, a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    chapters
}

fn compare_by(field: SortField, a: &Chapter, b: &Chapter) -> Ordering {
    match field {
        SortField::Name => name_key(a).cmp(&name_key(b)),
        SortField::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
        SortField::Accuracy => accuracy_key(a).total_cmp(&accuracy_key(b)),
        SortField::LastStudied => last_studied_key(a).cmp(&last_studied_key(b)),
        SortField::TotalQuestions => a.total_questions.cmp(&b.total_questions),
        SortField::Progress => a.progress_percent().total_cmp(&b.progress_percent()),
    }
}

// Case-insensitive collation stands in for locale-aware ordering; names that
// are equal under lowercasing compare Equal and keep input order.
fn name_key(chapter: &Chapter) -> String {
    chapter.name.to_lowercase()
}

// Absent accuracy sorts as 0 (no signal).
fn accuracy_key(chapter: &Chapter) -> f64 {
    chapter.accuracy.unwrap_or(0.0)
}

// Unstudied chapters sort as oldest (epoch 0).
fn last_studied_key(chapter: &Chapter) -> i64 {
    chapter
        .last_studied
        .map_or(0, |studied| studied.timestamp_millis())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
