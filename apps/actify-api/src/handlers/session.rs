//! Session handlers - issue and clear the `Token` cookie.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use actify_infra::mask_email;
use actify_shared::dto::{LoginRequest, SessionResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /jwt
///
/// Signs whatever the body claims; there is no credential check. A body
/// without a string `email` yields a token that owns nothing.
pub async fn login(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let LoginRequest { email, extra } = LoginRequest::from_slice(&body);
    let email = email.unwrap_or_default();

    let token = state.tokens.issue(&email, extra, Utc::now())?;

    if email.is_empty() {
        tracing::info!("Session issued without an email");
    } else {
        tracing::info!(email = %mask_email(&email), "Session issued");
    }

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.session_cookie(&token))
        .json(SessionResponse::ok()))
}

/// POST /logout
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(state.cookies.removal_cookie())
        .json(SessionResponse::ok())
}
