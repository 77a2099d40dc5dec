use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// Caller-supplied fields of a volunteer post.
///
/// Nothing here is validated; missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostDetails {
    pub organizer_email: String,
    pub organizer_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub volunteers_needed: i32,
    pub deadline: String,
    pub thumbnail: String,
}

/// Volunteer post - a call for volunteers published by an organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub details: PostDetails,
}

impl VolunteerPost {
    /// Create a new post with a generated ID.
    pub fn new(details: PostDetails) -> Self {
        Self::with_id(Uuid::new_v4(), details)
    }

    /// Build a post for a known ID, as used by full-field replacement.
    pub fn with_id(id: Uuid, details: PostDetails) -> Self {
        Self { id, details }
    }

    pub fn organizer_email(&self) -> &str {
        &self.details.organizer_email
    }
}

impl Record for VolunteerPost {
    fn id(&self) -> Uuid {
        self.id
    }
}
