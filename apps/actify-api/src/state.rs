//! Application state - shared across all handlers.

use std::sync::Arc;

use actify_core::ports::{PostRepository, RequestRepository, TokenService};
use actify_infra::{DatabaseConfig, InMemoryPostRepository, InMemoryRequestRepository};

#[cfg(feature = "postgres")]
use actify_infra::database::connect;
#[cfg(feature = "postgres")]
use actify_infra::{PostgresPostRepository, PostgresRequestRepository};

use crate::cookies::CookiePolicy;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub requests: Arc<dyn RequestRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub cookies: CookiePolicy,
    /// Which store backs the repositories, reported by the health check.
    pub store_backend: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(
        db_config: Option<&DatabaseConfig>,
        tokens: Arc<dyn TokenService>,
        cookies: CookiePolicy,
    ) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => {
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                            requests: Arc::new(PostgresRequestRepository::new(conn)),
                            tokens,
                            cookies,
                            store_backend: "postgres",
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("No database configured. Running with the in-memory store.");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
        }

        tracing::info!("Application state initialized (memory)");
        Self::in_memory(tokens, cookies)
    }

    /// State over empty in-memory collections.
    pub fn in_memory(tokens: Arc<dyn TokenService>, cookies: CookiePolicy) -> Self {
        let mut state = Self::with_repositories(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryRequestRepository::new()),
            tokens,
            cookies,
        );
        state.store_backend = "memory";
        state
    }

    /// State over caller-provided repositories.
    pub fn with_repositories(
        posts: Arc<dyn PostRepository>,
        requests: Arc<dyn RequestRepository>,
        tokens: Arc<dyn TokenService>,
        cookies: CookiePolicy,
    ) -> Self {
        Self {
            posts,
            requests,
            tokens,
            cookies,
            store_backend: "custom",
        }
    }
}
