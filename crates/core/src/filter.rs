//! Filter engine: a pure conjunction of predicates over a chapter sequence.

use crate::model::{Chapter, FilterOptions, Status, Subject};

/// Returns the chapters matching the subject scope and every selected
/// constraint, preserving the relative order of the input (stable filter).
///
/// An empty facet set imposes no constraint on that facet. The `subjects`
/// list inside `FilterOptions` is reserved and ignored; scoping is done by
/// the `subject` argument alone.
#[must_use]
pub fn filter_chapters(
    chapters: &[Chapter],
    subject: Subject,
    options: &FilterOptions,
) -> Vec<Chapter> {
    chapters
        .iter()
        .filter(|chapter| matches(chapter, subject, options))
        .cloned()
        .collect()
}

fn matches(chapter: &Chapter, subject: Subject, options: &FilterOptions) -> bool {
    if chapter.subject != subject {
        return false;
    }
    if !options.classes.is_empty() && !options.classes.contains(&chapter.class) {
        return false;
    }
    if !options.units.is_empty() && !options.units.contains(&chapter.unit) {
        return false;
    }
    if !options.statuses.is_empty() && !options.statuses.contains(&chapter.status) {
        return false;
    }
    if !options.difficulties.is_empty() && !options.difficulties.contains(&chapter.difficulty) {
        return false;
    }
    if options.show_weak_only && !chapter.is_weak_chapter {
        return false;
    }
    if options.show_not_started_only && chapter.status != Status::NotStarted {
        return false;
    }
    let query = options.query.trim();
    if !query.is_empty() && !matches_query(chapter, query) {
        return false;
    }
    true
}

/// Case-insensitive substring match against the name, any tag, or the
/// description. An empty tag list simply contributes no match.
fn matches_query(chapter: &Chapter, query: &str) -> bool {
    let needle = query.to_lowercase();
    chapter.name.to_lowercase().contains(&needle)
        || chapter
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
        || chapter.description.to_lowercase().contains(&needle)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChapterId, Difficulty};
    use std::collections::BTreeMap;

    fn chapter(name: &str, subject: Subject) -> Chapter {
        Chapter {
            id: ChapterId::from_name(name),
            subject,
            name: name.to_owned(),
            class: "Class 11".to_owned(),
            unit: "Mechanics".to_owned(),
            year_wise_question_count: BTreeMap::new(),
            question_solved: 0,
            total_questions: 0,
            status: Status::NotStarted,
            is_weak_chapter: false,
            difficulty: Difficulty::Medium,
            estimated_time_minutes: 60,
            last_studied: None,
            accuracy: None,
            tags: Vec::new(),
            description: String::new(),
            prerequisites: Vec::new(),
            related_chapters: Vec::new(),
        }
    }

    fn physics_fixture() -> Vec<Chapter> {
        let mut completed = chapter("Rotational Motion", Subject::Physics);
        completed.status = Status::Completed;
        completed.class = "Class 12".to_owned();
        completed.unit = "Rotation".to_owned();
        completed.tags = vec!["Torque".to_owned()];

        let mut waves = chapter("Waves", Subject::Physics);
        waves.is_weak_chapter = true;
        waves.description = "Standing waves and resonance".to_owned();

        let kinematics = chapter("Kinematics", Subject::Physics);

        let organic = chapter("Organic Chemistry Basics", Subject::Chemistry);

        vec![completed, waves, kinematics, organic]
    }

    #[test]
    fn scopes_to_the_requested_subject() {
        let chapters = physics_fixture();
        let filtered = filter_chapters(&chapters, Subject::Physics, &FilterOptions::default());
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|c| c.subject == Subject::Physics));
    }

    #[test]
    fn empty_facets_impose_no_constraint() {
        let chapters = physics_fixture();
        let unfiltered = filter_chapters(&chapters, Subject::Physics, &FilterOptions::default());
        assert_eq!(unfiltered.len(), 3);
    }

    #[test]
    fn class_facet_restricts_membership() {
        let chapters = physics_fixture();
        let options = FilterOptions {
            classes: vec!["Class 12".to_owned()],
            ..FilterOptions::default()
        };
        let filtered = filter_chapters(&chapters, Subject::Physics, &options);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Rotational Motion");
    }

    #[test]
    fn weak_toggle_keeps_only_weak_chapters() {
        let chapters = physics_fixture();
        let options = FilterOptions {
            show_weak_only: true,
            ..FilterOptions::default()
        };
        let filtered = filter_chapters(&chapters, Subject::Physics, &options);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Waves");
    }

    #[test]
    fn not_started_toggle_matches_status() {
        // Three physics chapters: Completed, Not Started, Not Started.
        let mut chapters = physics_fixture();
        chapters.retain(|c| c.subject == Subject::Physics);
        assert_eq!(chapters.len(), 3);

        let options = FilterOptions {
            show_not_started_only: true,
            ..FilterOptions::default()
        };
        let filtered = filter_chapters(&chapters, Subject::Physics, &options);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.status == Status::NotStarted));
    }

    #[test]
    fn query_matches_name_tags_and_description_case_insensitively() {
        let chapters = physics_fixture();

        let by_name = FilterOptions {
            query: "rotational".to_owned(),
            ..FilterOptions::default()
        };
        assert_eq!(
            filter_chapters(&chapters, Subject::Physics, &by_name).len(),
            1
        );

        let by_tag = FilterOptions {
            query: "TORQUE".to_owned(),
            ..FilterOptions::default()
        };
        assert_eq!(
            filter_chapters(&chapters, Subject::Physics, &by_tag).len(),
            1
        );

        let by_description = FilterOptions {
            query: "resonance".to_owned(),
            ..FilterOptions::default()
        };
        let matched = filter_chapters(&chapters, Subject::Physics, &by_description);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Waves");
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let chapters = physics_fixture();
        let options = FilterOptions {
            query: "   ".to_owned(),
            ..FilterOptions::default()
        };
        assert_eq!(filter_chapters(&chapters, Subject::Physics, &options).len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let chapters = physics_fixture();
        let options = FilterOptions {
            show_not_started_only: true,
            ..FilterOptions::default()
        };
        let once = filter_chapters(&chapters, Subject::Physics, &options);
        let twice = filter_chapters(&once, Subject::Physics, &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn adding_a_constraint_never_grows_the_result() {
        let chapters = physics_fixture();
        let mut options = FilterOptions::default();
        let baseline = filter_chapters(&chapters, Subject::Physics, &options).len();

        options.toggle_class("Class 12");
        let narrowed = filter_chapters(&chapters, Subject::Physics, &options).len();
        assert!(narrowed <= baseline);

        options.toggle_unit("Rotation");
        let further = filter_chapters(&chapters, Subject::Physics, &options).len();
        assert!(further <= narrowed);
    }

    #[test]
    fn result_preserves_input_order() {
        let chapters = physics_fixture();
        let filtered = filter_chapters(&chapters, Subject::Physics, &FilterOptions::default());
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Rotational Motion", "Waves", "Kinematics"]);
    }
}
