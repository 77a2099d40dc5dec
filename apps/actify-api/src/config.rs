//! Application configuration loaded from environment variables.

use std::env;

use actify_infra::DatabaseConfig;

/// Default origin of the separately hosted front end.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Deployment environment. Governs cross-site cookie attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_u32 = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };

        let database = Self::database_url(&lookup).map(|url| DatabaseConfig {
            url,
            max_connections: parse_u32("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_u32("DB_MIN_CONNECTIONS", 2),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: Environment::parse(
                lookup("RUST_ENV")
                    .or_else(|| lookup("NODE_ENV"))
                    .as_deref(),
            ),
            database,
            cors_allowed_origins: Self::parse_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref()),
        }
    }

    /// `DATABASE_URL` wins; otherwise compose one from `DB_USER`/`DB_PASS`.
    fn database_url<F>(lookup: &F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            return Some(url);
        }

        let user = lookup("DB_USER")?;
        let password = lookup("DB_PASS")?;
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
        let name = lookup("DB_NAME").unwrap_or_else(|| "actifyNow".to_string());

        Some(DatabaseConfig::url_from_credentials(
            &user, &password, &host, &name,
        ))
    }

    /// Comma-separated list; empty, `null` and non-http entries are dropped.
    fn parse_origins(raw: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
            .map(String::from)
            .collect();

        if origins.is_empty() {
            vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
        } else {
            origins
        }
    }
}
