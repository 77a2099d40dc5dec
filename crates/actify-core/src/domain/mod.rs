//! Domain entities - the records held by the document store.

mod post;
mod request;

pub use post::{PostDetails, VolunteerPost};
pub use request::{RequestDetails, VolunteerRequest};

use uuid::Uuid;

/// A stored record addressed by a store-generated identifier.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}
