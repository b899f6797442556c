//! Sync moods use case

use crate::domain::mood::to_exist_scale;
use crate::domain::{AttributeUpdate, JournalEntry};
use crate::error::Result;
use crate::infrastructure::AttributeApi;
use tracing::warn;

/// Exist template attribute holding the daily mood
pub const MOOD_ATTRIBUTE: &str = "mood";

/// One mood update per entry with a recognised mood label.
///
/// Entries with custom mood labels are skipped: their sentinel rating
/// would fall outside Exist's 1-9 scale.
pub fn mood_updates(entries: &[JournalEntry]) -> Vec<AttributeUpdate> {
    entries
        .iter()
        .filter_map(|entry| {
            if entry.has_known_mood() {
                Some(AttributeUpdate::new(
                    MOOD_ATTRIBUTE,
                    entry.date,
                    to_exist_scale(entry.mood_rating),
                ))
            } else {
                warn!(
                    date = %entry.date,
                    mood = %entry.mood_name,
                    "Skipping entry with unrecognised mood"
                );
                None
            }
        })
        .collect()
}

/// Service pushing Daylio moods into Exist's mood attribute
pub struct SyncMoodsService<A: AttributeApi> {
    api: A,
}

impl<A: AttributeApi> SyncMoodsService<A> {
    pub fn new(api: A) -> Self {
        SyncMoodsService { api }
    }

    /// Send mood updates for all entries, returning how many were sent
    pub fn execute(&self, entries: &[JournalEntry]) -> Result<usize> {
        let updates = mood_updates(entries);
        self.api.update_attributes(&updates)?;
        Ok(updates.len())
    }

    /// Ask Exist to start tracking the mood template attribute
    pub fn acquire(&self) -> Result<()> {
        self.api.acquire_attribute(MOOD_ATTRIBUTE)
    }
}
