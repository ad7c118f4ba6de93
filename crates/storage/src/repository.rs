use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use prep_core::model::{
    Chapter, ChapterError, ChapterId, Difficulty, Status, Subject,
};

/// Errors surfaced by chapter sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid chapter record: {0}")]
    InvalidRecord(String),
}

impl From<ChapterError> for StorageError {
    fn from(err: ChapterError) -> Self {
        StorageError::InvalidRecord(err.to_string())
    }
}

/// Wire shape for a chapter, using the catalog's JSON field names.
///
/// This mirrors the domain `Chapter` so sources can deserialize without
/// leaking wire concerns into the domain layer. The simpler data variant
/// omits `id`, `totalQuestions`, `difficulty`, and the study-signal fields;
/// all of those default here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub subject: Subject,
    pub chapter: String,
    pub class: String,
    pub unit: String,
    #[serde(default)]
    pub year_wise_question_count: BTreeMap<String, u32>,
    #[serde(default)]
    pub question_solved: u32,
    #[serde(default)]
    pub total_questions: Option<u32>,
    pub status: Status,
    #[serde(default)]
    pub is_weak_chapter: bool,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub estimated_time: u32,
    #[serde(default)]
    pub last_studied: Option<DateTime<Utc>>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub related_chapters: Vec<String>,
}

impl ChapterRecord {
    /// Convert the record into a validated domain `Chapter`.
    ///
    /// A missing `id` falls back to the chapter name; a missing
    /// `totalQuestions` falls back to the sum of the year-wise counts.
    ///
    /// # Errors
    ///
    /// Returns `ChapterError` when the record violates domain invariants.
    pub fn into_chapter(self) -> Result<Chapter, ChapterError> {
        let id = self
            .id
            .map_or_else(|| ChapterId::from_name(&self.chapter), ChapterId::new);
        let total_questions = self
            .total_questions
            .unwrap_or_else(|| self.year_wise_question_count.values().sum());

        Chapter {
            id,
            subject: self.subject,
            name: self.chapter,
            class: self.class,
            unit: self.unit,
            year_wise_question_count: self.year_wise_question_count,
            question_solved: self.question_solved,
            total_questions,
            status: self.status,
            is_weak_chapter: self.is_weak_chapter,
            difficulty: self.difficulty,
            estimated_time_minutes: self.estimated_time,
            last_studied: self.last_studied,
            accuracy: self.accuracy,
            tags: self.tags,
            description: self.description,
            prerequisites: self.prerequisites.into_iter().map(ChapterId::new).collect(),
            related_chapters: self
                .related_chapters
                .into_iter()
                .map(ChapterId::new)
                .collect(),
        }
        .validate()
    }
}

/// Source contract for the chapter catalog.
///
/// The returned sequence is a value: the core makes no assumption about its
/// origin and never mutates it.
#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Load the full, unfiltered chapter sequence.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the catalog cannot be read or a record
    /// is malformed.
    async fn load_chapters(&self) -> Result<Vec<Chapter>, StorageError>;
}

/// Simple in-memory repository for testing and prototyping.
///
/// The held sequence is replace-only; records are never edited in place.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    chapters: Arc<Mutex<Vec<Chapter>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chapters(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters: Arc::new(Mutex::new(chapters)),
        }
    }

    /// Replace the whole catalog with a new sequence.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the catalog lock is poisoned.
    pub fn replace_all(&self, chapters: Vec<Chapter>) -> Result<(), StorageError> {
        let mut guard = self
            .chapters
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = chapters;
        Ok(())
    }
}

#[async_trait]
impl ChapterRepository for InMemoryRepository {
    async fn load_chapters(&self) -> Result<Vec<Chapter>, StorageError> {
        let guard = self
            .chapters
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.clone())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
