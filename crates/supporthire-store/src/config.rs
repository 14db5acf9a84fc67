//! Store configuration.
//!
//! [`StoreConfig`] is a set of `clap` arguments backed by environment
//! variables, so a host binary can flatten it into its own CLI while
//! embedded callers resolve it from the environment alone.

use clap::{Args, Parser};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::{Result, StoreError};

/// Default database location; the file is created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:submissions.sqlite3?mode=rwc";

/// Connection settings for the submission store.
///
/// Forms always write to [`SUBMISSIONS_COLLECTION`](supporthire_forms::SUBMISSIONS_COLLECTION),
/// so the collection name is not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct StoreConfig {
    /// Database URL (SQLite path or connection string).
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled connections.
    #[arg(
        long,
        env = "SUPPORTHIRE_MAX_CONNECTIONS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,
}

#[derive(Parser)]
#[command(name = "supporthire-store")]
struct EnvOnly {
    #[command(flatten)]
    config: StoreConfig,
}

impl StoreConfig {
    /// Resolves the configuration from environment variables and defaults.
    pub fn from_env() -> Result<Self> {
        Self::try_parse_from(["supporthire-store"])
    }

    /// Resolves the configuration from command-line style arguments.
    ///
    /// The first item is the program name. Environment variables fill in
    /// anything the arguments leave out.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        EnvOnly::try_parse_from(args)
            .map(|parsed| parsed.config)
            .map_err(|err| StoreError::Config(err.to_string()))
    }

    /// Opens a connection pool for the configured database.
    pub async fn connect(&self) -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await?;
        info!(
            database = %self.database_url,
            max_connections = self.max_connections,
            "connected to submission store"
        );
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let config = StoreConfig::try_parse_from([
            "supporthire-store",
            "--database-url",
            "sqlite::memory:",
            "--max-connections",
            "2",
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_collection_is_not_an_argument() {
        let err = StoreConfig::try_parse_from(["supporthire-store", "--collection", "leads"])
            .unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_zero_connections_rejected() {
        let err = StoreConfig::try_parse_from(["supporthire-store", "--max-connections", "0"])
            .unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let err = StoreConfig::try_parse_from(["supporthire-store", "--verbose"]).unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let config = StoreConfig::try_parse_from([
            "supporthire-store",
            "--database-url",
            "sqlite::memory:",
            "--max-connections",
            "1",
        ])
        .unwrap();

        let pool = config.connect().await.unwrap();
        let row: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(row.0, 1);
    }
}
