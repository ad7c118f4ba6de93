use async_trait::async_trait;
use std::path::{Path, PathBuf};

use prep_core::model::Chapter;

use crate::repository::{ChapterRecord, ChapterRepository, StorageError};

/// Chapter source backed by a JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct JsonChapterSource {
    path: PathBuf,
}

impl JsonChapterSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ChapterRepository for JsonChapterSource {
    async fn load_chapters(&self) -> Result<Vec<Chapter>, StorageError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound
            } else {
                StorageError::Io(e.to_string())
            }
        })?;
        parse_chapters(&raw)
    }
}

/// Parses a JSON array of chapter records into validated domain chapters.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidRecord` when a record violates domain invariants.
pub fn parse_chapters(raw: &str) -> Result<Vec<Chapter>, StorageError> {
    let records: Vec<ChapterRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    records
        .into_iter()
        .map(|record| record.into_chapter().map_err(StorageError::from))
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{ChapterId, Difficulty, Status, Subject};

    const ENHANCED_RECORD: &str = r#"[
        {
            "id": "phy-waves",
            "subject": "Physics",
            "chapter": "Waves",
            "class": "Class 11",
            "unit": "Oscillations",
            "yearWiseQuestionCount": {"2024": 4, "2025": 6},
            "questionSolved": 3,
            "totalQuestions": 42,
            "status": "In Progress",
            "isWeakChapter": true,
            "difficulty": "Hard",
            "estimatedTime": 90,
            "lastStudied": "2025-06-01T10:00:00Z",
            "accuracy": 72.5,
            "tags": ["Sound", "Resonance"],
            "description": "Standing waves and resonance",
            "prerequisites": ["phy-shm"],
            "relatedChapters": ["phy-optics"]
        }
    ]"#;

    const SIMPLE_RECORD: &str = r#"[
        {
            "subject": "Chemistry",
            "chapter": "Chemical Bonding",
            "class": "Class 11",
            "unit": "Physical Chemistry",
            "yearWiseQuestionCount": {"2024": 5, "2025": 7},
            "questionSolved": 0,
            "status": "Not Started",
            "isWeakChapter": false
        }
    ]"#;

    #[test]
    fn parses_the_enhanced_record_shape() {
        let chapters = parse_chapters(ENHANCED_RECORD).unwrap();
        assert_eq!(chapters.len(), 1);

        let chapter = &chapters[0];
        assert_eq!(chapter.id, ChapterId::new("phy-waves"));
        assert_eq!(chapter.subject, Subject::Physics);
        assert_eq!(chapter.status, Status::InProgress);
        assert_eq!(chapter.difficulty, Difficulty::Hard);
        assert_eq!(chapter.total_questions, 42);
        assert_eq!(chapter.estimated_time_minutes, 90);
        assert_eq!(chapter.accuracy, Some(72.5));
        assert!(chapter.is_weak_chapter);
        assert_eq!(chapter.tags, vec!["Sound", "Resonance"]);
        assert_eq!(chapter.prerequisites, vec![ChapterId::new("phy-shm")]);
    }

    #[test]
    fn parses_the_simpler_record_shape_with_defaults() {
        let chapters = parse_chapters(SIMPLE_RECORD).unwrap();
        let chapter = &chapters[0];

        assert_eq!(chapter.id, ChapterId::from_name("Chemical Bonding"));
        // Total falls back to the year-wise sum.
        assert_eq!(chapter.total_questions, 12);
        assert_eq!(chapter.difficulty, Difficulty::Medium);
        assert_eq!(chapter.accuracy, None);
        assert_eq!(chapter.last_studied, None);
        assert!(chapter.tags.is_empty());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_chapters("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn invalid_record_is_reported_as_such() {
        let raw = r#"[{
            "subject": "Physics",
            "chapter": "Waves",
            "class": "Class 11",
            "unit": "Oscillations",
            "status": "Completed",
            "accuracy": 140.0
        }]"#;
        let err = parse_chapters(raw).unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord(_)));
    }

    #[tokio::test]
    async fn missing_file_maps_to_not_found() {
        let source = JsonChapterSource::new("/nonexistent/chapters.json");
        let err = source.load_chapters().await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
