use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{VolunteerPost, VolunteerRequest};
use crate::error::RepoError;

/// Outcome of an update-with-upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub matched: u64,
    pub modified: u64,
    /// Set when no record matched and a new one was inserted.
    pub upserted_id: Option<Uuid>,
}

impl UpsertOutcome {
    pub fn updated() -> Self {
        Self {
            matched: 1,
            modified: 1,
            upserted_id: None,
        }
    }

    pub fn inserted(id: Uuid) -> Self {
        Self {
            matched: 0,
            modified: 0,
            upserted_id: Some(id),
        }
    }
}

/// Generic repository trait over one collection.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Every record, in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find a record by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new record.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete a record by its ID, returning how many were removed.
    async fn delete(&self, id: ID) -> Result<u64, RepoError>;
}

/// Volunteer post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<VolunteerPost, Uuid> {
    async fn find_by_organizer(&self, email: &str) -> Result<Vec<VolunteerPost>, RepoError>;

    /// Replace every field of the post, inserting it when absent.
    async fn upsert(&self, post: VolunteerPost) -> Result<UpsertOutcome, RepoError>;

    /// Subtract one from `volunteers_needed`, returning the matched count.
    ///
    /// There is no floor: a count of zero becomes -1.
    async fn decrement_volunteers_needed(&self, id: Uuid) -> Result<u64, RepoError>;
}

/// Volunteer request repository.
#[async_trait]
pub trait RequestRepository: BaseRepository<VolunteerRequest, Uuid> {
    async fn find_by_volunteer(&self, email: &str) -> Result<Vec<VolunteerRequest>, RepoError>;
}
