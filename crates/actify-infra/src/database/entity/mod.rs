//! SeaORM entities, one table per collection.

pub mod post;
pub mod request;
