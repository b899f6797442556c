//! Output formatting utilities

use crate::domain::AttributeUpdate;
use std::collections::BTreeSet;

/// Number of items shown in a dry-run preview
pub const PREVIEW_LIMIT: usize = 5;

/// Format a dry-run preview of pending updates: the count, then at most
/// [`PREVIEW_LIMIT`] of them.
pub fn format_update_preview(updates: &[AttributeUpdate]) -> String {
    if updates.is_empty() {
        return "0 updates to sync\n".to_string();
    }

    let shown = updates.len().min(PREVIEW_LIMIT);
    let mut output = format!(
        "{} updates to sync, showing first {}:\n",
        updates.len(),
        shown
    );
    for update in &updates[..shown] {
        output.push_str(&format!("{}\n", update));
    }
    output
}

/// Format the activities that would become Exist attributes.
pub fn format_activity_list(activities: &BTreeSet<String>) -> String {
    if activities.is_empty() {
        return "No activities to create\n".to_string();
    }

    let mut output = format!("Activities to create ({}):\n", activities.len());
    for activity in activities {
        output.push_str(&format!("  {}\n", activity));
    }
    output
}
