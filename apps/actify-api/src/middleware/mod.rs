//! Middleware modules.

pub mod auth;
pub mod cors;
pub mod error;
pub mod ownership;
pub mod request_id;

pub use auth::{AuthenticationError, Identity};
pub use cors::cors_middleware;
pub use error::{AppError, AppResult};
pub use ownership::{OrganizerEmail, OwnerField, Owned, ParamSource, VolunteerEmail};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdMiddleware};
