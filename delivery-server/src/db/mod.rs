//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) connection and schema bootstrap

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Statements run on every startup; all are idempotent
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS restaurants SCHEMALESS;
DEFINE TABLE IF NOT EXISTS categories SCHEMALESS;
DEFINE TABLE IF NOT EXISTS menu_items SCHEMALESS;
DEFINE TABLE IF NOT EXISTS users SCHEMALESS;
DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE INDEX IF NOT EXISTS users_email_unique ON TABLE users FIELDS email UNIQUE;
DEFINE INDEX IF NOT EXISTS menu_items_restaurant ON TABLE menu_items FIELDS restaurantId;
DEFINE INDEX IF NOT EXISTS orders_user ON TABLE orders FIELDS userId;
"#;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and select namespace/database
    pub async fn new(db_path: &str, namespace: &str, database: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::from_handle(db, namespace, database).await
    }

    /// Select namespace/database on an existing handle and apply the schema
    pub async fn from_handle(
        db: Surreal<Db>,
        namespace: &str,
        database: &str,
    ) -> Result<Self, AppError> {
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(namespace, database, "Database connection established (SurrealDB RocksDB)");

        apply_schema(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

async fn apply_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(SCHEMA)
        .await
        .and_then(|response| response.check())
        .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
    Ok(())
}
