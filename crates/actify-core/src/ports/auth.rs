//! Authentication and authorization ports.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub email: String,
    /// Any further fields the caller supplied at login.
    pub extra: Map<String, Value>,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Token service trait for JWT operations.
///
/// Both operations take the current time explicitly so expiry can be
/// exercised against a simulated clock.
pub trait TokenService: Send + Sync {
    /// Sign a token for the claimed identity, valid for [`TokenService::ttl_seconds`].
    fn issue(
        &self,
        email: &str,
        extra: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError>;

    /// Verify signature and expiry, returning the decoded claims.
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError>;

    /// Token lifetime in seconds.
    fn ttl_seconds(&self) -> i64;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing token cookie")]
    MissingToken,

    #[error("Identity does not own the requested resource")]
    NotOwner,

    #[error("Signing secret not configured")]
    MissingSecret,

    #[error("Signing error: {0}")]
    Signing(String),
}
