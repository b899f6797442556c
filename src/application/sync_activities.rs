//! Sync activities use case

use crate::domain::{sanitize_activity_name, AttributeUpdate, JournalEntry};
use crate::error::Result;
use crate::infrastructure::AttributeApi;
use tracing::debug;

/// One boolean update per (entry, activity), named with the sanitized activity.
///
/// Empty activities, and those that sanitize to nothing, produce no update.
pub fn activity_updates(entries: &[JournalEntry]) -> Vec<AttributeUpdate> {
    let mut updates = Vec::new();
    for entry in entries {
        for activity in &entry.activities {
            match sanitize_activity_name(activity) {
                Some(name) => updates.push(AttributeUpdate::new(name, entry.date, true)),
                None if activity.is_empty() => {}
                None => debug!(%activity, date = %entry.date, "Activity has no usable name"),
            }
        }
    }
    updates
}

/// Service marking each day's Daylio activities in Exist
pub struct SyncActivitiesService<A: AttributeApi> {
    api: A,
}

impl<A: AttributeApi> SyncActivitiesService<A> {
    pub fn new(api: A) -> Self {
        SyncActivitiesService { api }
    }

    /// Send activity updates for all entries, returning how many were sent
    pub fn execute(&self, entries: &[JournalEntry]) -> Result<usize> {
        let updates = activity_updates(entries);
        self.api.update_attributes(&updates)?;
        Ok(updates.len())
    }
}
