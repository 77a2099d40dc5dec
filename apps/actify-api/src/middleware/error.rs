//! Error handling - RFC 7807 responses with a top-level `message`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use actify_core::error::RepoError;
use actify_core::ports::AuthError;
use actify_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Problem details body for this error.
    pub fn problem(&self) -> ErrorResponse {
        match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Forbidden => ErrorResponse::forbidden(),
            AppError::Conflict(detail) => {
                ErrorResponse::new(409, "Conflict", "conflict").with_detail(detail)
            }
            AppError::Internal(_) => ErrorResponse::internal_error(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(self.problem())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Expired and tampered tokens are indistinguishable to the caller.
impl From<&AuthError> for AppError {
    fn from(err: &AuthError) -> Self {
        match err {
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingToken => {
                AppError::Unauthorized
            }
            AuthError::NotOwner => AppError::Forbidden,
            AuthError::MissingSecret | AuthError::Signing(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::from(&err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_and_invalid_tokens_look_alike() {
        let expired = AppError::from(AuthError::TokenExpired);
        let tampered = AppError::from(AuthError::InvalidToken("InvalidSignature".to_string()));

        assert_eq!(expired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(tampered.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            serde_json::to_value(expired.problem()).unwrap(),
            serde_json::to_value(tampered.problem()).unwrap()
        );
    }

    #[test]
    fn test_store_failures_hide_details() {
        let err = AppError::from(RepoError::Query("syntax error at or near".to_string()));
        let body = serde_json::to_value(err.problem()).unwrap();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("detail").is_none());
    }

    #[test]
    fn test_not_owner_is_forbidden() {
        let err = AppError::from(AuthError::NotOwner);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.problem().message, "forbidden access");
    }
}
