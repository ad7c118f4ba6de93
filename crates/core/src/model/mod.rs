mod chapter;
mod filter;
mod ids;
mod sort;
mod stats;

pub use chapter::{Chapter, ChapterError, Difficulty, ParseLabelError, Status, Subject, Trend};
pub use filter::FilterOptions;
pub use ids::ChapterId;
pub use sort::{SortDirection, SortField, SortOption};
pub use stats::SubjectStats;
