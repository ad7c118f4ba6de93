//! Stats aggregator: a single-pass reduction of a chapter sequence into a
//! per-subject summary.

use crate::model::{Chapter, Status, Subject, SubjectStats};

/// Reduces a chapter sequence already scoped to one subject.
///
/// Pure reduction with no ordering dependency; an empty input yields the
/// all-zero summary.
#[must_use]
pub fn subject_stats(chapters: &[Chapter]) -> SubjectStats {
    accumulate(chapters.iter())
}

/// Scopes the full sequence to the subject, then reduces it.
#[must_use]
pub fn subject_stats_for(subject: Subject, chapters: &[Chapter]) -> SubjectStats {
    accumulate(chapters.iter().filter(|chapter| chapter.subject == subject))
}

fn accumulate<'a>(chapters: impl Iterator<Item = &'a Chapter>) -> SubjectStats {
    let mut stats = SubjectStats::default();
    let mut accuracy_sum = 0.0;
    let mut accuracy_count: u32 = 0;

    for chapter in chapters {
        stats.total_chapters += 1;
        match chapter.status {
            Status::Completed => stats.completed_chapters += 1,
            Status::InProgress => stats.in_progress_chapters += 1,
            Status::NotStarted => stats.not_started_chapters += 1,
        }
        if chapter.is_weak_chapter {
            stats.weak_chapters += 1;
        }
        stats.total_questions += u64::from(chapter.total_questions);
        stats.solved_questions += u64::from(chapter.question_solved);
        if chapter.status != Status::NotStarted {
            stats.total_time_spent_minutes += u64::from(chapter.estimated_time_minutes);
        }
        // Absent or zero accuracy carries no signal and is excluded from
        // the average.
        if let Some(accuracy) = chapter.accuracy {
            if accuracy > 0.0 {
                accuracy_sum += accuracy;
                accuracy_count += 1;
            }
        }
    }

    if accuracy_count > 0 {
        stats.average_accuracy = accuracy_sum / f64::from(accuracy_count);
    }
    stats
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
