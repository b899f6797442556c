//! Domain layer - Journal entries, moods, activities and Exist attributes

pub mod activity;
pub mod attribute;
pub mod entry;
pub mod mood;

pub use activity::{collect_activity_names, sanitize_activity_name};
pub use attribute::{AttributeUpdate, AttributeValue, ValueType};
pub use entry::JournalEntry;
