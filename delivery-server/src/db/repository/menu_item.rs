//! Menu Item Repository

use serde::Serialize;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, SELECT_FIELDS};

pub const TABLE: &str = "menu_items";

const MENU_LIMIT: usize = 1000;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemDoc {
    #[serde(flatten)]
    data: MenuItemCreate,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Menu of one restaurant
    pub async fn find_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM {TABLE} WHERE restaurantId = $rid LIMIT {MENU_LIMIT}"
            ))
            .bind(("rid", restaurant_id.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        self.base.find_by_key(TABLE, id).await
    }

    /// Create a menu item; the caller checks the restaurant exists
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let now = shared::util::now_millis();
        let doc = MenuItemDoc {
            data,
            created_at: now,
            updated_at: now,
        };
        self.base.create(TABLE, serde_json::to_value(doc)?).await
    }

    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<Option<MenuItem>> {
        self.base.merge(TABLE, id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.delete(TABLE, id).await
    }
}
