//! Shared fixtures for the HTTP tests: a counting store and token helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::cookie::Cookie;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Map;
use uuid::Uuid;

use actify_api::{AppState, CookiePolicy, Environment, TOKEN_COOKIE};
use actify_core::domain::{PostDetails, VolunteerPost, VolunteerRequest};
use actify_core::error::RepoError;
use actify_core::ports::{
    BaseRepository, PostRepository, RequestRepository, TokenService, UpsertOutcome,
};
use actify_infra::{InMemoryPostRepository, InMemoryRequestRepository, JwtConfig, JwtTokenService};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Wraps an in-memory collection and counts every call that reaches it.
pub struct Recording<R> {
    inner: R,
    calls: AtomicUsize,
}

impl<R> Recording<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRepository<VolunteerPost, Uuid> for Recording<InMemoryPostRepository> {
    async fn find_all(&self) -> Result<Vec<VolunteerPost>, RepoError> {
        self.hit();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VolunteerPost>, RepoError> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, entity: VolunteerPost) -> Result<VolunteerPost, RepoError> {
        self.hit();
        self.inner.insert(entity).await
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        self.hit();
        self.inner.delete(id).await
    }
}

#[async_trait]
impl PostRepository for Recording<InMemoryPostRepository> {
    async fn find_by_organizer(&self, email: &str) -> Result<Vec<VolunteerPost>, RepoError> {
        self.hit();
        self.inner.find_by_organizer(email).await
    }

    async fn upsert(&self, post: VolunteerPost) -> Result<UpsertOutcome, RepoError> {
        self.hit();
        self.inner.upsert(post).await
    }

    async fn decrement_volunteers_needed(&self, id: Uuid) -> Result<u64, RepoError> {
        self.hit();
        self.inner.decrement_volunteers_needed(id).await
    }
}

#[async_trait]
impl BaseRepository<VolunteerRequest, Uuid> for Recording<InMemoryRequestRepository> {
    async fn find_all(&self) -> Result<Vec<VolunteerRequest>, RepoError> {
        self.hit();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VolunteerRequest>, RepoError> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, entity: VolunteerRequest) -> Result<VolunteerRequest, RepoError> {
        self.hit();
        self.inner.insert(entity).await
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        self.hit();
        self.inner.delete(id).await
    }
}

#[async_trait]
impl RequestRepository for Recording<InMemoryRequestRepository> {
    async fn find_by_volunteer(&self, email: &str) -> Result<Vec<VolunteerRequest>, RepoError> {
        self.hit();
        self.inner.find_by_volunteer(email).await
    }
}

/// Application state plus handles on the recording stores behind it.
pub struct TestContext {
    pub state: AppState,
    pub posts: Arc<Recording<InMemoryPostRepository>>,
    pub requests: Arc<Recording<InMemoryRequestRepository>>,
    pub tokens: Arc<JwtTokenService>,
}

impl TestContext {
    pub fn new(seed_posts: Vec<VolunteerPost>) -> Self {
        Self::for_environment(Environment::Development, seed_posts)
    }

    pub fn for_environment(environment: Environment, seed_posts: Vec<VolunteerPost>) -> Self {
        let posts = Arc::new(Recording::new(InMemoryPostRepository::with_records(
            seed_posts,
        )));
        let requests = Arc::new(Recording::new(InMemoryRequestRepository::new()));
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: TEST_SECRET.to_string(),
            ..JwtConfig::default()
        }));

        let state = AppState::with_repositories(
            posts.clone(),
            requests.clone(),
            tokens.clone(),
            CookiePolicy::for_environment(environment),
        );

        Self {
            state,
            posts,
            requests,
            tokens,
        }
    }

    /// Total store calls across both collections.
    pub fn store_calls(&self) -> usize {
        self.posts.calls() + self.requests.calls()
    }

    pub fn token_at(&self, email: &str, issued_at: DateTime<Utc>) -> String {
        self.tokens
            .issue(email, Map::new(), issued_at)
            .expect("token should sign")
    }

    pub fn session_cookie(&self, email: &str) -> Cookie<'static> {
        Cookie::new(TOKEN_COOKIE, self.token_at(email, Utc::now()))
    }
}

pub fn post_by(organizer_email: &str, title: &str, volunteers_needed: i32) -> VolunteerPost {
    VolunteerPost::new(PostDetails {
        organizer_email: organizer_email.to_string(),
        title: title.to_string(),
        volunteers_needed,
        ..Default::default()
    })
}

/// Store whose every call fails as a broken database would.
pub struct Failing;

fn query_failure() -> RepoError {
    RepoError::Query("relation \"volunteer_posts\" does not exist".to_string())
}

#[async_trait]
impl<T: Send + 'static> BaseRepository<T, Uuid> for Failing {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Err(query_failure())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<T>, RepoError> {
        Err(query_failure())
    }

    async fn insert(&self, _entity: T) -> Result<T, RepoError> {
        Err(query_failure())
    }

    async fn delete(&self, _id: Uuid) -> Result<u64, RepoError> {
        Err(query_failure())
    }
}

#[async_trait]
impl PostRepository for Failing {
    async fn find_by_organizer(&self, _email: &str) -> Result<Vec<VolunteerPost>, RepoError> {
        Err(query_failure())
    }

    async fn upsert(&self, _post: VolunteerPost) -> Result<UpsertOutcome, RepoError> {
        Err(query_failure())
    }

    async fn decrement_volunteers_needed(&self, _id: Uuid) -> Result<u64, RepoError> {
        Err(query_failure())
    }
}

#[async_trait]
impl RequestRepository for Failing {
    async fn find_by_volunteer(&self, _email: &str) -> Result<Vec<VolunteerRequest>, RepoError> {
        Err(query_failure())
    }
}

/// State over a store that fails every call.
pub fn failing_state() -> AppState {
    let tokens = Arc::new(JwtTokenService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        ..JwtConfig::default()
    }));

    AppState::with_repositories(
        Arc::new(Failing),
        Arc::new(Failing),
        tokens,
        CookiePolicy::for_environment(Environment::Development),
    )
}
