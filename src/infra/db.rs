use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, Pool, Postgres, Sqlite};
use tokio::sync::Mutex;
use tracing::log::LevelFilter;
use tracing::{error, info, warn};

use crate::domain::ports::StoreHealth;
use crate::error::AppError;

/// A store backend that knows how to open a migrated pool from a URL.
#[async_trait]
pub trait Backend: sqlx::Database {
    async fn open(url: &str) -> Result<Pool<Self>, sqlx::Error>;
}

#[async_trait]
impl Backend for Sqlite {
    async fn open(url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
        info!("[Database] Opening SQLite store with WAL mode...");

        let opts = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        // Every connection to a memory URL gets its own empty database.
        let max_connections = if is_memory_url(url) { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(opts)
            .await?;

        sqlx::migrate!("./migrations/sqlite").run(&pool).await?;
        Ok(pool)
    }
}

#[async_trait]
impl Backend for Postgres {
    async fn open(url: &str) -> Result<Pool<Postgres>, sqlx::Error> {
        info!("[Database] Opening PostgreSQL store...");

        let opts = PgConnectOptions::from_str(url)?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(opts)
            .await?;

        sqlx::migrate!("./migrations/postgres").run(&pool).await?;
        Ok(pool)
    }
}

/// Lazily connected pool owned by the data-access layer.
///
/// Starts uninitialized, connects on first use and drops back to
/// uninitialized when a query fails at the connection level, so the next
/// call reconnects. Without a URL it never connects.
pub struct Database<DB: Backend> {
    url: Option<String>,
    pool: RwLock<Option<Pool<DB>>>,
    /// Held while connecting so only one task opens and migrates.
    connecting: Mutex<()>,
}

impl<DB: Backend> Database<DB> {
    pub fn new(url: Option<String>) -> Self {
        Self { url, pool: RwLock::new(None), connecting: Mutex::new(()) }
    }

    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub async fn pool(&self) -> Option<Pool<DB>> {
        if let Some(pool) = self.current() {
            return Some(pool);
        }

        let url = self.url.as_deref()?;
        let _connecting = self.connecting.lock().await;

        // Another request connected while we waited.
        if let Some(pool) = self.current() {
            return Some(pool);
        }

        match DB::open(url).await {
            Ok(pool) => {
                info!("[Database] Connected");
                *self.pool.write().unwrap_or_else(PoisonError::into_inner) = Some(pool.clone());
                Some(pool)
            }
            Err(e) => {
                warn!("[Database] Failed to connect: {}", e);
                None
            }
        }
    }

    /// Pool for a read, or `None` (logged) when the store is unreachable.
    pub async fn for_read(&self, context: &str) -> Option<Pool<DB>> {
        let pool = self.pool().await;
        if pool.is_none() {
            warn!("[Database] Cannot {}: database not available", context);
        }
        pool
    }

    /// Pool for a write. Writes have no safe fallback, so unavailability is an error.
    pub async fn for_write(&self, context: &str) -> Result<Pool<DB>, AppError> {
        self.pool().await.ok_or_else(|| {
            warn!("[Database] Cannot {}: database not available", context);
            AppError::DatabaseUnavailable
        })
    }

    /// Logs a failed query and hands the error back unchanged.
    pub fn failed(&self, context: &str, e: sqlx::Error) -> AppError {
        error!("[Database] Failed to {}: {}", context, e);
        if is_connection_error(&e) {
            self.reset();
        }
        AppError::Database(e)
    }

    fn current(&self) -> Option<Pool<DB>> {
        self.pool.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn reset(&self) {
        let mut slot = self.pool.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            warn!("[Database] Connection lost, reconnecting on next use");
        }
    }
}

#[async_trait]
impl<DB: Backend> StoreHealth for Database<DB> {
    async fn is_available(&self) -> bool {
        self.pool().await.is_some()
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolClosed
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::WorkerCrashed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_database_is_unavailable() {
        let db = Database::<Sqlite>::unconfigured();
        assert!(!db.is_configured());
        assert!(db.pool().await.is_none());
        assert!(db.for_read("list things").await.is_none());
        assert!(!db.is_available().await);
    }

    #[tokio::test]
    async fn test_unconfigured_database_rejects_writes() {
        let db = Database::<Sqlite>::unconfigured();
        let err = db.for_write("create thing").await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseUnavailable));
        assert_eq!(err.to_string(), "Database not available");
    }

    #[tokio::test]
    async fn test_connection_errors_reset_pool() {
        let db = Database::<Sqlite>::new(Some("sqlite::memory:".to_string()));
        assert!(db.pool().await.is_some());
        assert!(db.current().is_some());

        let err = db.failed("list things", sqlx::Error::PoolClosed);
        assert!(matches!(err, AppError::Database(_)));
        assert!(db.current().is_none());
    }

    #[tokio::test]
    async fn test_query_errors_keep_pool() {
        let db = Database::<Sqlite>::new(Some("sqlite::memory:".to_string()));
        assert!(db.pool().await.is_some());

        let _ = db.failed("list things", sqlx::Error::RowNotFound);
        assert!(db.current().is_some());
    }

    #[tokio::test]
    async fn test_memory_store_keeps_its_tables() {
        let db = Database::<Sqlite>::new(Some("sqlite::memory:".to_string()));
        let pool = db.pool().await.unwrap();

        for _ in 0..3 {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(count, 0);
        }
    }

    #[tokio::test]
    async fn test_store_reconnects_after_reset() {
        let db = Database::<Sqlite>::new(Some("sqlite::memory:".to_string()));
        assert!(db.pool().await.is_some());

        db.reset();
        assert!(db.current().is_none());
        assert!(db.pool().await.is_some());
    }

    #[test]
    fn test_memory_urls_are_detected() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file:estate?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://estate.db?mode=rwc"));
    }
}
