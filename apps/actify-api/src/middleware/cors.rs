//! CORS - credentialed requests from the configured front-end origins.

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for an already validated origin list.
///
/// Credentials must be allowed or the browser drops the `Token` cookie, and
/// credentialed CORS forbids wildcard origins, so every origin is explicit.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
