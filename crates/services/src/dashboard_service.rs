use prep_core::filter::filter_chapters;
use prep_core::model::{Chapter, FilterOptions, SortOption, Subject, SubjectStats};
use prep_core::sort::sort_chapters;
use prep_core::stats::subject_stats_for;
use storage::repository::ChapterRepository;

use crate::error::DashboardError;
use crate::view::{ChapterListView, SubjectFacets};

/// Orchestrates the chapter pipeline over a loaded catalog snapshot.
///
/// The repository is awaited once at construction; every query afterwards is
/// a pure, synchronous function of the snapshot and the supplied options.
#[derive(Debug, Clone)]
pub struct DashboardService {
    chapters: Vec<Chapter>,
}

impl DashboardService {
    /// Load the catalog from the repository collaborator.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` when the repository fails; the
    /// pipeline itself has no failure modes.
    pub async fn load(repository: &dyn ChapterRepository) -> Result<Self, DashboardError> {
        let chapters = repository.load_chapters().await?;
        Ok(Self { chapters })
    }

    /// Builds a service directly from an already-loaded snapshot.
    #[must_use]
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// The full, unfiltered catalog snapshot.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Filtered and sorted chapters for one subject.
    #[must_use]
    pub fn chapter_view(
        &self,
        subject: Subject,
        options: &FilterOptions,
        sort: SortOption,
    ) -> ChapterListView {
        let total_in_subject = self
            .chapters
            .iter()
            .filter(|chapter| chapter.subject == subject)
            .count();
        let filtered = filter_chapters(&self.chapters, subject, options);
        ChapterListView {
            subject,
            chapters: sort_chapters(filtered, sort),
            total_in_subject,
        }
    }

    /// Aggregate summary for one subject over the full snapshot.
    ///
    /// Computed from the unfiltered catalog: stats track the subject and the
    /// data set, not the current filter selection.
    #[must_use]
    pub fn subject_stats(&self, subject: Subject) -> SubjectStats {
        subject_stats_for(subject, &self.chapters)
    }

    /// Unique classes and units for the subject, in first-seen order.
    #[must_use]
    pub fn facets(&self, subject: Subject) -> SubjectFacets {
        let mut facets = SubjectFacets::default();
        for chapter in self.chapters.iter().filter(|c| c.subject == subject) {
            if !facets.classes.contains(&chapter.class) {
                facets.classes.push(chapter.class.clone());
            }
            if !facets.units.contains(&chapter.unit) {
                facets.units.push(chapter.unit.clone());
            }
        }
        facets
    }
}
