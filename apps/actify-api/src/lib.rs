//! # Actify API
//!
//! HTTP surface of the ActifyNow volunteer service: cookie sessions,
//! ownership-scoped listings and CRUD over posts and requests.

pub mod config;
pub mod cookies;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::{AppConfig, Environment};
pub use cookies::{CookiePolicy, TOKEN_COOKIE};
pub use handlers::configure_routes;
pub use state::AppState;
