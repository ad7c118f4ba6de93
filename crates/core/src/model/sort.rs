use std::fmt;

/// Field a chapter list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Chapter display name. Also the documented fallback for unknown
    /// field tokens.
    #[default]
    Name,
    Difficulty,
    Accuracy,
    LastStudied,
    TotalQuestions,
    Progress,
}

impl SortField {
    /// Resolves a field token, falling back to `Name` for unknown tokens.
    ///
    /// "chapter" is accepted as an alias because the wire format calls the
    /// display name field `chapter`.
    #[must_use]
    pub fn parse_or_name(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "difficulty" => SortField::Difficulty,
            "accuracy" => SortField::Accuracy,
            "laststudied" | "last-studied" | "last_studied" => SortField::LastStudied,
            "totalquestions" | "total-questions" | "total_questions" => SortField::TotalQuestions,
            "progress" => SortField::Progress,
            // "name", "chapter", and anything unrecognised.
            _ => SortField::Name,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortField::Name => "name",
            SortField::Difficulty => "difficulty",
            SortField::Accuracy => "accuracy",
            SortField::LastStudied => "lastStudied",
            SortField::TotalQuestions => "totalQuestions",
            SortField::Progress => "progress",
        };
        f.write_str(label)
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A (field, direction) pair selecting the list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    #[must_use]
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses a `"field-direction"` token such as `"accuracy-desc"`.
    ///
    /// Never fails: unknown fields fall back to name ordering and unknown
    /// or missing directions to ascending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        // Only treat the suffix as a direction when it actually is one, so
        // a bare hyphenated field like "last-studied" stays intact.
        let (field_raw, direction) = match raw.rsplit_once('-') {
            Some((field, suffix)) => match suffix.trim().to_lowercase().as_str() {
                "desc" | "descending" => (field, SortDirection::Descending),
                "asc" | "ascending" => (field, SortDirection::Ascending),
                _ => (raw, SortDirection::Ascending),
            },
            None => (raw, SortDirection::Ascending),
        };
        Self {
            field: SortField::parse_or_name(field_raw),
            direction,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}-{}", self.field, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_and_direction() {
        let sort = SortOption::parse("accuracy-desc");
        assert_eq!(sort.field, SortField::Accuracy);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn parse_bare_field_defaults_to_ascending() {
        let sort = SortOption::parse("progress");
        assert_eq!(sort.field, SortField::Progress);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn parse_chapter_alias_maps_to_name() {
        assert_eq!(SortOption::parse("chapter-asc").field, SortField::Name);
    }

    #[test]
    fn unknown_field_falls_back_to_name() {
        let sort = SortOption::parse("popularity-desc");
        assert_eq!(sort.field, SortField::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn hyphenated_field_without_direction_stays_intact() {
        let sort = SortOption::parse("last-studied");
        assert_eq!(sort.field, SortField::LastStudied);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn display_round_trips() {
        let sort = SortOption::new(SortField::LastStudied, SortDirection::Descending);
        assert_eq!(SortOption::parse(&sort.to_string()), sort);
    }
}
