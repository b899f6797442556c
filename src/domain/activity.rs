//! Activity names: the distinct set and Exist-safe identifiers

use crate::domain::JournalEntry;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn removed_chars_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[&()]").unwrap())
}

fn underscore_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"_{2,}").unwrap())
}

/// Turn an activity name into an Exist attribute identifier.
///
/// Spaces and `/` become `_`, `&`, `(` and `)` are dropped, then runs of
/// underscores collapse and edge underscores are trimmed. Returns `None`
/// when nothing usable is left. Unlike a plain strip of `/`, `gym/swim`
/// becomes `gym_swim` rather than `gymswim`.
pub fn sanitize_activity_name(name: &str) -> Option<String> {
    let separated = name.replace([' ', '/'], "_");
    let stripped = removed_chars_regex().replace_all(&separated, "");
    let collapsed = underscore_run_regex().replace_all(&stripped, "_");
    let trimmed = collapsed.trim_matches('_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Every distinct non-empty activity across the entries.
pub fn collect_activity_names(entries: &[JournalEntry]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(|entry| entry.activities.iter())
        .filter(|activity| !activity.is_empty())
        .cloned()
        .collect()
}
