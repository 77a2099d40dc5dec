//! Authentication extractor - the session cookie turned into an [`Identity`].

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use actify_core::ports::{AuthError, TokenClaims};

use crate::cookies::TOKEN_COOKIE;
use crate::middleware::error::AppError;
use crate::middleware::request_id::RequestId;
use crate::state::AppState;

/// Authenticated caller, rebuilt from the token on every request.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.email)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub expires_at: i64,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            email: claims.email,
            expires_at: claims.expires_at,
        }
    }
}

/// Rejection raised while authenticating or authorizing a request.
#[derive(Debug)]
pub struct AuthenticationError {
    pub error: AuthError,
    pub request_id: Option<String>,
}

impl AuthenticationError {
    pub(crate) fn new(error: AuthError, req: &HttpRequest) -> Self {
        let request_id = req.extensions().get::<RequestId>().map(|id| id.0.clone());
        Self { error, request_id }
    }
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::from(&self.error).status_code()
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let app_error = AppError::from(&self.error);
        let mut problem = app_error.problem();
        if let Some(request_id) = &self.request_id {
            problem = problem.with_request_id(request_id.clone());
        }

        actix_web::HttpResponse::build(self.status_code()).json(problem)
    }
}

/// Verify the `Token` cookie against the current time.
pub fn authenticate(req: &HttpRequest) -> Result<Identity, AuthError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AuthError::MissingSecret
    })?;

    let cookie = req.cookie(TOKEN_COOKIE).ok_or(AuthError::MissingToken)?;

    let claims = state
        .tokens
        .verify(cookie.value(), chrono::Utc::now())
        .inspect_err(|e| tracing::debug!(reason = %e, "Rejected session token"))?;

    Ok(Identity::from(claims))
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(|e| AuthenticationError::new(e, req)))
    }
}
