/// Derived per-subject summary. Recomputed from the chapter sequence,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectStats {
    pub total_chapters: u32,
    pub completed_chapters: u32,
    pub in_progress_chapters: u32,
    pub not_started_chapters: u32,
    pub weak_chapters: u32,
    pub total_questions: u64,
    pub solved_questions: u64,
    /// Mean accuracy over chapters with a defined, non-zero signal;
    /// 0 when no chapter carries one.
    pub average_accuracy: f64,
    /// Minutes of estimated time across started (non-"Not Started") chapters.
    pub total_time_spent_minutes: u64,
}

impl SubjectStats {
    /// Solved-question share as a percentage; 0 when no questions exist.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.solved_questions as f64 / self.total_questions as f64 * 100.0
    }

    /// Completed-chapter share as a percentage; 0 when no chapters exist.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.total_chapters == 0 {
            return 0.0;
        }
        f64::from(self.completed_chapters) / f64::from(self.total_chapters) * 100.0
    }
}
