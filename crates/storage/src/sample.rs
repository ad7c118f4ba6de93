//! Built-in sample catalog used when no data file is supplied.

use chrono::Duration;
use std::collections::BTreeMap;

use prep_core::model::{Chapter, ChapterId, Difficulty, Status, Subject};
use prep_core::time::fixed_now;

struct Seed {
    subject: Subject,
    name: &'static str,
    class: &'static str,
    unit: &'static str,
    years: [(u32, u32); 2],
    solved: u32,
    total: u32,
    status: Status,
    weak: bool,
    difficulty: Difficulty,
    minutes: u32,
    studied_days_ago: Option<i64>,
    accuracy: Option<f64>,
    tags: &'static [&'static str],
    description: &'static str,
}

impl Seed {
    fn build(self) -> Chapter {
        let mut year_wise_question_count = BTreeMap::new();
        for (year, count) in self.years {
            year_wise_question_count.insert(year.to_string(), count);
        }
        Chapter {
            id: ChapterId::from_name(self.name),
            subject: self.subject,
            name: self.name.to_owned(),
            class: self.class.to_owned(),
            unit: self.unit.to_owned(),
            year_wise_question_count,
            question_solved: self.solved,
            total_questions: self.total,
            status: self.status,
            is_weak_chapter: self.weak,
            difficulty: self.difficulty,
            estimated_time_minutes: self.minutes,
            last_studied: self
                .studied_days_ago
                .map(|days| fixed_now() - Duration::days(days)),
            accuracy: self.accuracy,
            tags: self.tags.iter().map(|t| (*t).to_owned()).collect(),
            description: self.description.to_owned(),
            prerequisites: Vec::new(),
            related_chapters: Vec::new(),
        }
    }
}

/// A small catalog spanning all three subjects with varied progress signals.
#[must_use]
pub fn sample_chapters() -> Vec<Chapter> {
    let seeds = vec![
        Seed {
            subject: Subject::Physics,
            name: "Rotational Motion",
            class: "Class 12",
            unit: "Mechanics",
            years: [(2024, 6), (2025, 8)],
            solved: 14,
            total: 14,
            status: Status::Completed,
            weak: false,
            difficulty: Difficulty::Hard,
            minutes: 150,
            studied_days_ago: Some(3),
            accuracy: Some(86.0),
            tags: &["Torque", "Angular Momentum"],
            description: "Rigid body dynamics, torque, and angular momentum",
        },
        Seed {
            subject: Subject::Physics,
            name: "Waves",
            class: "Class 11",
            unit: "Oscillations",
            years: [(2024, 7), (2025, 4)],
            solved: 5,
            total: 11,
            status: Status::InProgress,
            weak: true,
            difficulty: Difficulty::Medium,
            minutes: 120,
            studied_days_ago: Some(12),
            accuracy: Some(58.0),
            tags: &["Sound", "Resonance"],
            description: "Standing waves, beats, and resonance",
        },
        Seed {
            subject: Subject::Physics,
            name: "Electrostatics",
            class: "Class 12",
            unit: "Electricity",
            years: [(2024, 9), (2025, 9)],
            solved: 0,
            total: 18,
            status: Status::NotStarted,
            weak: false,
            difficulty: Difficulty::Medium,
            minutes: 180,
            studied_days_ago: None,
            accuracy: None,
            tags: &["Coulomb's Law", "Field"],
            description: "Charges, fields, and potential",
        },
        Seed {
            subject: Subject::Chemistry,
            name: "Chemical Bonding",
            class: "Class 11",
            unit: "Physical Chemistry",
            years: [(2024, 5), (2025, 7)],
            solved: 12,
            total: 12,
            status: Status::Completed,
            weak: false,
            difficulty: Difficulty::Medium,
            minutes: 110,
            studied_days_ago: Some(20),
            accuracy: Some(91.0),
            tags: &["VSEPR", "Hybridisation"],
            description: "Ionic and covalent bonding, molecular geometry",
        },
        Seed {
            subject: Subject::Chemistry,
            name: "Organic Reaction Mechanisms",
            class: "Class 12",
            unit: "Organic Chemistry",
            years: [(2024, 8), (2025, 6)],
            solved: 4,
            total: 14,
            status: Status::InProgress,
            weak: true,
            difficulty: Difficulty::Hard,
            minutes: 200,
            studied_days_ago: Some(1),
            accuracy: Some(47.0),
            tags: &["SN1", "SN2", "Elimination"],
            description: "Substitution and elimination pathways",
        },
        Seed {
            subject: Subject::Chemistry,
            name: "The p-Block Elements",
            class: "Class 12",
            unit: "Inorganic Chemistry",
            years: [(2024, 4), (2025, 4)],
            solved: 0,
            total: 8,
            status: Status::NotStarted,
            weak: false,
            difficulty: Difficulty::Easy,
            minutes: 90,
            studied_days_ago: None,
            accuracy: None,
            tags: &["Groups 13-18"],
            description: "Trends and compounds of the p-block",
        },
        Seed {
            subject: Subject::Mathematics,
            name: "Definite Integration",
            class: "Class 12",
            unit: "Calculus",
            years: [(2024, 6), (2025, 10)],
            solved: 9,
            total: 16,
            status: Status::InProgress,
            weak: false,
            difficulty: Difficulty::Hard,
            minutes: 160,
            studied_days_ago: Some(5),
            accuracy: Some(74.0),
            tags: &["Integrals", "Area"],
            description: "Properties of definite integrals and areas",
        },
        Seed {
            subject: Subject::Mathematics,
            name: "Probability",
            class: "Class 12",
            unit: "Statistics",
            years: [(2024, 5), (2025, 5)],
            solved: 10,
            total: 10,
            status: Status::Completed,
            weak: false,
            difficulty: Difficulty::Medium,
            minutes: 100,
            studied_days_ago: Some(9),
            accuracy: Some(82.0),
            tags: &["Bayes", "Distributions"],
            description: "Conditional probability and distributions",
        },
        Seed {
            subject: Subject::Mathematics,
            name: "Complex Numbers",
            class: "Class 11",
            unit: "Algebra",
            years: [(2024, 3), (2025, 6)],
            solved: 0,
            total: 9,
            status: Status::NotStarted,
            weak: true,
            difficulty: Difficulty::Medium,
            minutes: 130,
            studied_days_ago: None,
            accuracy: None,
            tags: &["Argand Plane", "Roots of Unity"],
            description: "Modulus, argument, and De Moivre's theorem",
        },
    ];

    seeds.into_iter().map(Seed::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_every_subject() {
        let chapters = sample_chapters();
        for subject in Subject::ALL {
            assert!(chapters.iter().any(|c| c.subject == subject));
        }
    }

    #[test]
    fn sample_records_satisfy_domain_invariants() {
        for chapter in sample_chapters() {
            assert!(chapter.clone().validate().is_ok(), "{}", chapter.name);
            assert!(chapter.question_solved <= chapter.total_questions);
        }
    }

    #[test]
    fn sample_ids_are_unique() {
        let chapters = sample_chapters();
        let mut ids: Vec<_> = chapters.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), chapters.len());
    }
}
