//! In-memory document store - used as fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use actify_core::domain::{Record, VolunteerPost, VolunteerRequest};
use actify_core::error::RepoError;
use actify_core::ports::{BaseRepository, PostRepository, RequestRepository, UpsertOutcome};

/// In-memory collection kept in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

/// In-memory volunteer post repository.
pub type InMemoryPostRepository = InMemoryRepository<VolunteerPost>;

/// In-memory volunteer request repository.
pub type InMemoryRequestRepository = InMemoryRepository<VolunteerRequest>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Seed the collection, as a fixture would.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        let records = self.records.read().await;
        records.iter().filter(|r| predicate(r)).cloned().collect()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        records.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut records = self.records.write().await;

        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_organizer(&self, email: &str) -> Result<Vec<VolunteerPost>, RepoError> {
        Ok(self.filter(|p| p.organizer_email() == email).await)
    }

    async fn upsert(&self, post: VolunteerPost) -> Result<UpsertOutcome, RepoError> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post;
                Ok(UpsertOutcome::updated())
            }
            None => {
                let id = post.id;
                records.push(post);
                Ok(UpsertOutcome::inserted(id))
            }
        }
    }

    async fn decrement_volunteers_needed(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.details.volunteers_needed -= 1;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn find_by_volunteer(&self, email: &str) -> Result<Vec<VolunteerRequest>, RepoError> {
        Ok(self.filter(|r| r.volunteer_email() == email).await)
    }
}
