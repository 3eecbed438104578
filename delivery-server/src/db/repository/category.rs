//! Category Repository

use serde::Serialize;
use shared::models::{Category, CategoryCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, SELECT_FIELDS};

pub const TABLE: &str = "categories";

const LIST_LIMIT: usize = 100;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryDoc {
    #[serde(flatten)]
    data: CategoryCreate,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories (capped)
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query(format!("SELECT {SELECT_FIELDS} FROM {TABLE} LIMIT {LIST_LIMIT}"))
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Create a new category
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let now = shared::util::now_millis();
        let doc = CategoryDoc {
            data,
            created_at: now,
            updated_at: now,
        };
        self.base.create(TABLE, serde_json::to_value(doc)?).await
    }
}
