//! Create activity tags use case

use crate::domain::ValueType;
use crate::error::Result;
use crate::infrastructure::AttributeApi;
use std::collections::BTreeSet;

/// Exist group for user-defined attributes
pub const CUSTOM_GROUP: &str = "custom";

/// Service defining one custom boolean Exist attribute per activity
pub struct CreateActivityTagsService<A: AttributeApi> {
    api: A,
}

impl<A: AttributeApi> CreateActivityTagsService<A> {
    pub fn new(api: A) -> Self {
        CreateActivityTagsService { api }
    }

    /// Create an attribute for every activity, in sorted order
    pub fn execute(&self, activities: &BTreeSet<String>) -> Result<usize> {
        for activity in activities {
            self.api
                .create_attribute(activity, ValueType::Boolean, CUSTOM_GROUP, false)?;
        }
        Ok(activities.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::RecordingApi;

    #[test]
    fn test_creates_boolean_custom_attributes() {
        let api = RecordingApi::default();
        let activities: BTreeSet<String> =
            ["reading", "friends"].iter().map(|s| s.to_string()).collect();

        let created = CreateActivityTagsService::new(&api)
            .execute(&activities)
            .unwrap();

        assert_eq!(created, 2);
        assert_eq!(
            *api.created.borrow(),
            vec![
                ("friends".to_string(), ValueType::Boolean, "custom".to_string(), false),
                ("reading".to_string(), ValueType::Boolean, "custom".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_empty_set_creates_nothing() {
        let api = RecordingApi::default();
        let created = CreateActivityTagsService::new(&api)
            .execute(&BTreeSet::new())
            .unwrap();
        assert_eq!(created, 0);
        assert!(api.created.borrow().is_empty());
    }
}
