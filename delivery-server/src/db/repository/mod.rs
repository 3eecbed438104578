//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

// Catalog
pub mod category;
pub mod menu_item;
pub mod restaurant;

// Accounts
pub mod user;

// Orders
pub mod order;

// Re-exports
pub use category::CategoryRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use restaurant::{RestaurantFilter, RestaurantRepository};
pub use user::{UserRecord, UserRepository};

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Compare-and-set lost against a concurrent writer
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let message = err.to_string();
        // Unique index violation, e.g. "Database index `users_email_unique` already contains ..."
        if message.contains("already contains") {
            RepoError::Duplicate(message)
        } else if is_retryable(&err) {
            RepoError::Conflict(message)
        } else {
            RepoError::Database(message)
        }
    }
}

/// Attempts for writes that may lose an optimistic transaction race
pub(crate) const WRITE_ATTEMPTS: usize = 8;

/// Read/write conflict on commit; the statement can simply be re-run
pub(crate) fn is_retryable(err: &surrealdb::Error) -> bool {
    err.to_string().contains("can be retried")
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Validation(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Conflict(msg) => AppError::concurrent_modification(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// Record keys are 32-char lowercase hex strings generated on create
// (`shared::util::new_record_key`). Records are addressed with
// `type::thing($tb, $key)` and read back with `record::id(id) AS id`, so models
// carry the bare key. Cross-references (restaurantId, userId, menuItemId)
// store the bare key as a plain string.

/// Projection used by every read: all fields, id flattened to its key
pub(crate) const SELECT_FIELDS: &str = "*, record::id(id) AS id";

#[derive(serde::Deserialize)]
struct KeyRow {
    #[allow(dead_code)]
    id: String,
}

/// Base repository with database reference and keyed-record helpers
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Load one record by key
    pub async fn find_by_key<T: DeserializeOwned>(
        &self,
        table: &'static str,
        key: &str,
    ) -> RepoResult<Option<T>> {
        let record: Option<T> = self
            .db
            .query(format!("SELECT {SELECT_FIELDS} FROM type::thing($tb, $key)"))
            .bind(("tb", table))
            .bind(("key", key.to_string()))
            .await?
            .take(0)?;
        Ok(record)
    }

    /// Whether a record with this key exists
    pub async fn exists(&self, table: &'static str, key: &str) -> RepoResult<bool> {
        let row: Option<KeyRow> = self
            .db
            .query("SELECT record::id(id) AS id FROM type::thing($tb, $key)")
            .bind(("tb", table))
            .bind(("key", key.to_string()))
            .await?
            .take(0)?;
        Ok(row.is_some())
    }

    /// Create a record under a freshly generated key and read it back
    pub async fn create<D, T>(&self, table: &'static str, data: D) -> RepoResult<T>
    where
        D: Serialize + 'static,
        T: DeserializeOwned,
    {
        let key = shared::util::new_record_key();
        let mut response = self
            .db
            .query("CREATE type::thing($tb, $key) CONTENT $data RETURN NONE")
            .query(format!("SELECT {SELECT_FIELDS} FROM type::thing($tb, $key)"))
            .bind(("tb", table))
            .bind(("key", key.clone()))
            .bind(("data", data))
            .await?
            .check()?;
        let created: Option<T> = response.take(1)?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {table}:{key}")))
    }

    /// Merge present fields into an existing record and stamp `updatedAt`
    ///
    /// Returns `None` when the record does not exist.
    pub async fn merge<P, T>(&self, table: &'static str, key: &str, patch: &P) -> RepoResult<Option<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        if !self.exists(table, key).await? {
            return Ok(None);
        }

        let mut data = serde_json::to_value(patch)?;
        if let Some(map) = data.as_object_mut() {
            map.insert(
                "updatedAt".to_string(),
                serde_json::Value::from(shared::util::now_millis()),
            );
        }

        let mut response = self
            .db
            .query("UPDATE type::thing($tb, $key) MERGE $data RETURN NONE")
            .query(format!("SELECT {SELECT_FIELDS} FROM type::thing($tb, $key)"))
            .bind(("tb", table))
            .bind(("key", key.to_string()))
            .bind(("data", data))
            .await?
            .check()?;
        let updated: Option<T> = response.take(1)?;
        Ok(updated)
    }

    /// Delete a record; `false` when it did not exist
    pub async fn delete(&self, table: &'static str, key: &str) -> RepoResult<bool> {
        if !self.exists(table, key).await? {
            return Ok(false);
        }
        self.db
            .query("DELETE type::thing($tb, $key)")
            .bind(("tb", table))
            .bind(("key", key.to_string()))
            .await?
            .check()?;
        Ok(true)
    }
}
