//! # Actify Infrastructure
//!
//! Concrete implementations of the ports defined in `actify-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL document store via SeaORM
//! - `auth` - JWT session tokens

pub mod database;
pub mod pii;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryRequestRepository};
pub use pii::mask_email;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresRequestRepository};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
