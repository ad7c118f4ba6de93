use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::ChapterId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChapterError {
    #[error("chapter name cannot be empty")]
    EmptyName,

    #[error("accuracy must be a finite percentage in [0, 100], got {0}")]
    AccuracyOutOfRange(f64),
}

/// Error type for parsing a labelled enumeration from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {raw}")]
pub struct ParseLabelError {
    kind: &'static str,
    raw: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_owned(),
        }
    }
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// Top-level academic domain partitioning chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    /// All subjects, in presentation order.
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    /// Full display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }

    /// Abbreviated label for narrow layouts.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Subject::Physics => "Phy",
            Subject::Chemistry => "Chem",
            Subject::Mathematics => "Math",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physics" | "phy" => Ok(Subject::Physics),
            "chemistry" | "chem" => Ok(Subject::Chemistry),
            "mathematics" | "maths" | "math" => Ok(Subject::Mathematics),
            _ => Err(ParseLabelError::new("subject", s)),
        }
    }
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Study-progress state of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl Status {
    /// Display label matching the wire representation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not started" | "not-started" => Ok(Status::NotStarted),
            "in progress" | "in-progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(ParseLabelError::new("status", s)),
        }
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Three-level difficulty rating for a chapter.
///
/// Defaults to `Medium`: the simpler data variant carries no difficulty and
/// a neutral rating keeps ordinal sorting meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Ordinal rank used for numeric comparison (Easy < Medium < Hard).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseLabelError::new("difficulty", s)),
        }
    }
}

//
// ─── CHAPTER ───────────────────────────────────────────────────────────────────
//

/// A unit of syllabus content with study-progress metadata.
///
/// Chapters are immutable reference records: the pipeline filters, sorts,
/// and aggregates them but never edits them in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: ChapterId,
    pub subject: Subject,
    /// Display name; doubles as the fallback identity key.
    pub name: String,
    pub class: String,
    pub unit: String,
    /// Question counts keyed by year label. Keys are lexically numeric
    /// strings; year ordering must compare them numerically.
    pub year_wise_question_count: BTreeMap<String, u32>,
    pub question_solved: u32,
    pub total_questions: u32,
    pub status: Status,
    pub is_weak_chapter: bool,
    pub difficulty: Difficulty,
    pub estimated_time_minutes: u32,
    /// Absent means "never studied".
    pub last_studied: Option<DateTime<Utc>>,
    /// Percentage in [0, 100]. Absent or 0 means "no signal" and is
    /// excluded from averages.
    pub accuracy: Option<f64>,
    pub tags: Vec<String>,
    pub description: String,
    /// Cross-references; informational only, never traversed here.
    pub prerequisites: Vec<ChapterId>,
    pub related_chapters: Vec<ChapterId>,
}

impl Chapter {
    /// Checks the record against the data-model invariants.
    ///
    /// `question_solved <= total_questions` is assumed for well-formed data
    /// but deliberately not enforced.
    ///
    /// # Errors
    ///
    /// Returns `ChapterError::EmptyName` for a blank display name, or
    /// `ChapterError::AccuracyOutOfRange` when accuracy is not a finite
    /// percentage in [0, 100].
    pub fn validate(self) -> Result<Self, ChapterError> {
        if self.name.trim().is_empty() {
            return Err(ChapterError::EmptyName);
        }
        if let Some(accuracy) = self.accuracy {
            if !accuracy.is_finite() || !(0.0..=100.0).contains(&accuracy) {
                return Err(ChapterError::AccuracyOutOfRange(accuracy));
            }
        }
        Ok(self)
    }

    /// Solved-question share as a percentage; 0 when no questions exist.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.question_solved) / f64::from(self.total_questions) * 100.0
    }

    /// Year-wise question counts ordered newest year first.
    ///
    /// Year labels are compared numerically, not lexically; labels that do
    /// not parse as years are skipped.
    #[must_use]
    pub fn year_counts_newest_first(&self) -> Vec<(u32, u32)> {
        let mut years: Vec<(u32, u32)> = self
            .year_wise_question_count
            .iter()
            .filter_map(|(year, count)| year.trim().parse::<u32>().ok().map(|y| (y, *count)))
            .collect();
        years.sort_by(|a, b| b.0.cmp(&a.0));
        years
    }

    /// Question-count trend between the two most recent years.
    ///
    /// A missing previous year counts as 0. Returns `None` when no year data
    /// exists at all.
    #[must_use]
    pub fn question_trend(&self) -> Option<Trend> {
        let years = self.year_counts_newest_first();
        let (_, latest) = *years.first()?;
        let previous = years.get(1).map_or(0, |(_, count)| *count);
        Some(if latest > previous {
            Trend::Up
        } else if latest < previous {
            Trend::Down
        } else {
            Trend::Flat
        })
    }
}

/// Direction of the year-over-year question-count trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
