#![forbid(unsafe_code)]

pub mod json;
pub mod repository;
pub mod sample;

pub use json::JsonChapterSource;
pub use repository::{ChapterRecord, ChapterRepository, InMemoryRepository, StorageError};
