//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Login payload. Any JSON is accepted; a string `email` names the identity
/// and every other field rides along in the token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub extra: Map<String, Value>,
}

impl LoginRequest {
    /// Parse a raw body leniently. Non-JSON and non-object bodies carry nothing.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(Self::from)
            .unwrap_or_default()
    }
}

impl From<Value> for LoginRequest {
    fn from(value: Value) -> Self {
        let Value::Object(mut extra) = value else {
            return Self::default();
        };

        let email = match extra.remove("email") {
            Some(Value::String(email)) if !email.is_empty() => Some(email),
            _ => None,
        };

        Self { email, extra }
    }
}

/// Response of the session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
}

impl SessionResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result of inserting a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub inserted_id: Uuid,
}

/// Result of an update, with or without upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<Uuid>,
}

/// Result of deleting a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}
