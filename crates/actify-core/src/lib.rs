//! # Actify Core
//!
//! The domain layer of the ActifyNow volunteer service.
//! This crate contains the record types and the ports the infrastructure implements.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
