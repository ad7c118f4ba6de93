use crate::model::chapter::{Difficulty, Status, Subject};

/// Transient, UI-scoped filter selections.
///
/// An empty facet set means "no restriction on that facet", not "match
/// nothing". Callers must preserve this asymmetry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Reserved for cross-subject views. The scoping subject is passed to
    /// the filter engine separately and this list is currently unused.
    pub subjects: Vec<Subject>,
    pub classes: Vec<String>,
    pub units: Vec<String>,
    pub statuses: Vec<Status>,
    pub difficulties: Vec<Difficulty>,
    pub show_weak_only: bool,
    pub show_not_started_only: bool,
    /// Free-text query; matched case-insensitively after trimming.
    pub query: String,
}

impl FilterOptions {
    /// Adds the class to the selection, or removes it if already selected.
    pub fn toggle_class(&mut self, class: impl Into<String>) {
        toggle(&mut self.classes, class.into());
    }

    /// Adds the unit to the selection, or removes it if already selected.
    pub fn toggle_unit(&mut self, unit: impl Into<String>) {
        toggle(&mut self.units, unit.into());
    }

    /// Adds the status to the selection, or removes it if already selected.
    pub fn toggle_status(&mut self, status: Status) {
        toggle(&mut self.statuses, status);
    }

    /// Adds the difficulty to the selection, or removes it if already selected.
    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        toggle(&mut self.difficulties, difficulty);
    }

    /// True when no facet, toggle, or query constrains the view.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.classes.is_empty()
            && self.units.is_empty()
            && self.statuses.is_empty()
            && self.difficulties.is_empty()
            && !self.show_weak_only
            && !self.show_not_started_only
            && self.query.trim().is_empty()
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(position) = selection.iter().position(|existing| *existing == value) {
        selection.remove(position);
    } else {
        selection.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained() {
        assert!(FilterOptions::default().is_unconstrained());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut options = FilterOptions::default();
        options.toggle_class("Class 11");
        assert_eq!(options.classes, vec!["Class 11".to_owned()]);

        options.toggle_class("Class 11");
        assert!(options.classes.is_empty());
    }

    #[test]
    fn whitespace_query_leaves_options_unconstrained() {
        let options = FilterOptions {
            query: "   ".to_owned(),
            ..FilterOptions::default()
        };
        assert!(options.is_unconstrained());
    }

    #[test]
    fn toggles_constrain_the_view() {
        let mut options = FilterOptions::default();
        options.toggle_status(Status::Completed);
        assert!(!options.is_unconstrained());
    }
}
