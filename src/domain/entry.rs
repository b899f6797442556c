//! Journal entries imported from a Daylio export

use crate::domain::mood;
use chrono::NaiveDate;

/// Separator Daylio uses between activities in a single CSV cell
pub const ACTIVITY_DELIMITER: &str = " | ";

/// A single Daylio journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub mood_name: String,
    pub mood_rating: i32,
    pub activities: Vec<String>,
    pub note: String,
}

impl JournalEntry {
    /// Build an entry, deriving the rating from the mood label
    pub fn new(date: NaiveDate, mood_name: String, activities: Vec<String>, note: String) -> Self {
        let mood_rating = mood::mood_rating(&mood_name);
        JournalEntry {
            date,
            mood_name,
            mood_rating,
            activities,
            note,
        }
    }

    /// Whether the mood label was one of the five Daylio defaults
    pub fn has_known_mood(&self) -> bool {
        self.mood_rating != mood::UNKNOWN_MOOD_RATING
    }
}

/// Split an activities cell and drop the excluded names.
///
/// Order and duplicates are preserved. An empty cell yields a single
/// empty string, matching what the export contains.
pub fn split_activities(field: &str, excluded: &[String]) -> Vec<String> {
    field
        .split(ACTIVITY_DELIMITER)
        .filter(|activity| !excluded.iter().any(|e| e.as_str() == *activity))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_preserves_order_and_duplicates() {
        assert_eq!(split_activities("a | b | a", &[]), names(&["a", "b", "a"]));
    }

    #[test]
    fn test_split_filters_excluded() {
        assert_eq!(
            split_activities("a | b | a", &names(&["b"])),
            names(&["a", "a"])
        );
    }

    #[test]
    fn test_split_requires_exact_delimiter() {
        assert_eq!(split_activities("a|b", &[]), names(&["a|b"]));
        assert_eq!(
            split_activities("work | gym/swim", &[]),
            names(&["work", "gym/swim"])
        );
    }

    #[test]
    fn test_split_empty_field() {
        assert_eq!(split_activities("", &[]), names(&[""]));
    }

    #[test]
    fn test_new_derives_rating() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let entry = JournalEntry::new(date, "good".into(), vec![], String::new());
        assert_eq!(entry.mood_rating, 4);
        assert!(entry.has_known_mood());

        let entry = JournalEntry::new(date, "sleepy".into(), vec![], String::new());
        assert_eq!(entry.mood_rating, -1);
        assert!(!entry.has_known_mood());
    }
}
