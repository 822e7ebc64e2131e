//! SQLite-backed store for fetched reference documents

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::docs::error::{CacheError, FetchError};
use crate::docs::fetcher::{DocumentFetcher, DocumentKind};
use crate::symbols::version::Version;

pub struct DocumentCache {
    conn: Mutex<Connection>,
}

impl DocumentCache {
    pub fn new(db_path: &Path) -> Result<Self, CacheError> {
        info!("Initializing document cache at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let cache = Self {
            conn: Mutex::new(conn),
        };
        cache.create_schema()?;

        Ok(cache)
    }

    /// Creates a cache that lives only as long as this value
    pub fn in_memory() -> Result<Self, CacheError> {
        let cache = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        cache.create_schema()?;
        Ok(cache)
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|_| CacheError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), CacheError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                version TEXT NOT NULL,
                kind TEXT NOT NULL,
                body TEXT NOT NULL,
                fetched_at INTEGER NOT NULL,
                UNIQUE(version, kind)
            )
            "#,
            [],
        )?;

        debug!("Document cache schema ready");
        Ok(())
    }

    pub fn get(&self, version: Version, kind: DocumentKind) -> Result<Option<String>, CacheError> {
        let conn = self.lock_conn()?;
        let body = conn
            .query_row(
                "SELECT body FROM documents WHERE version = ?1 AND kind = ?2",
                (version.to_string(), kind.as_str()),
                |row| row.get(0),
            )
            .optional()?;

        Ok(body)
    }

    pub fn put(&self, version: Version, kind: DocumentKind, body: &str) -> Result<(), CacheError> {
        let now = chrono::Utc::now().timestamp_millis();
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO documents (version, kind, body, fetched_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(version, kind) DO UPDATE SET
                body = excluded.body,
                fetched_at = excluded.fetched_at
            "#,
            (version.to_string(), kind.as_str(), body, now),
        )?;

        Ok(())
    }

    /// Versions with every document kind cached, oldest first
    pub fn cached_versions(&self) -> Result<Vec<Version>, CacheError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT version FROM documents GROUP BY version HAVING COUNT(DISTINCT kind) = ?1",
        )?;

        let raw = stmt
            .query_map([DocumentKind::ALL.len() as i64], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        let mut versions: Vec<Version> = raw.iter().filter_map(|v| v.parse().ok()).collect();
        versions.sort();
        Ok(versions)
    }
}

/// Fetcher that serves documents from a [`DocumentCache`] before asking `inner`
pub struct CachingFetcher<F: DocumentFetcher> {
    inner: F,
    cache: DocumentCache,
    offline: bool,
}

impl<F: DocumentFetcher> CachingFetcher<F> {
    /// With `offline` set, documents missing from the cache are never fetched.
    pub fn new(inner: F, cache: DocumentCache, offline: bool) -> Self {
        Self {
            inner,
            cache,
            offline,
        }
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<F: DocumentFetcher> DocumentFetcher for CachingFetcher<F> {
    async fn fetch(&self, version: Version, kind: DocumentKind) -> Result<String, FetchError> {
        if let Some(body) = self.cache.get(version, kind)? {
            debug!("Cache hit for {} {}", version, kind.file_name());
            return Ok(body);
        }

        if self.offline {
            return Err(FetchError::NotCached(format!(
                "{}/{}",
                version,
                kind.file_name()
            )));
        }

        info!("Getting API document {} for GTK {}", kind.file_name(), version);
        let body = self.inner.fetch(version, kind).await?;
        self.cache.put(version, kind, &body)?;

        Ok(body)
    }
}
