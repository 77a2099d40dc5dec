use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// Status given to a freshly submitted request.
pub const DEFAULT_STATUS: &str = "requested";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Caller-supplied fields of a volunteer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    /// The post applied to. Not checked against the posts collection.
    pub post_id: Uuid,
    #[serde(default)]
    pub volunteer_email: String,
    #[serde(default)]
    pub volunteer_name: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Volunteer request - a volunteer applying to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRequest {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub details: RequestDetails,
}

impl VolunteerRequest {
    /// Create a new request with a generated ID.
    pub fn new(details: RequestDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
        }
    }

    pub fn volunteer_email(&self) -> &str {
        &self.details.volunteer_email
    }
}

impl Record for VolunteerRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}
