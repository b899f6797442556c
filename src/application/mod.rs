//! Application layer - Use cases and orchestration

pub mod create_activity_tags;
pub mod sync_activities;
pub mod sync_moods;

pub use create_activity_tags::CreateActivityTagsService;
pub use sync_activities::{activity_updates, SyncActivitiesService};
pub use sync_moods::{mood_updates, SyncMoodsService, MOOD_ATTRIBUTE};
