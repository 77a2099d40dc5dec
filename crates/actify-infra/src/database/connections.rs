#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left bare in URL userinfo; everything else is escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Configuration for the document store database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Compose a Postgres URL from discrete credentials.
    ///
    /// User and password are percent-encoded so `@`, `:` or `/` in a
    /// password cannot split the URL.
    pub fn url_from_credentials(user: &str, password: &str, host: &str, database: &str) -> String {
        let user = utf8_percent_encode(user, USERINFO);
        let password = utf8_percent_encode(password, USERINFO);
        format!("postgres://{user}:{password}@{host}/{database}")
    }
}

/// Open the connection pool shared by every repository.
///
/// The pool is safe for concurrent use; handlers clone the handle freely.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!("Database connected (pool: {})", config.max_connections);

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_credentials() {
        let url = DatabaseConfig::url_from_credentials("actify", "s3cret", "db:5432", "actifyNow");
        assert_eq!(url, "postgres://actify:s3cret@db:5432/actifyNow");
    }

    #[test]
    fn test_credentials_are_percent_encoded() {
        let url = DatabaseConfig::url_from_credentials("ops.team", "p@ss:w/rd", "db", "actifyNow");
        assert_eq!(url, "postgres://ops.team:p%40ss%3Aw%2Frd@db/actifyNow");
    }
}
