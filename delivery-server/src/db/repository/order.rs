//! Order Repository

use serde::Serialize;
use shared::models::{Order, OrderCreate, OrderStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, SELECT_FIELDS};

pub const TABLE: &str = "orders";

/// Most recent orders returned per user
const LIST_LIMIT: usize = 100;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderDoc {
    user_id: String,
    #[serde(flatten)]
    data: OrderCreate,
    status: OrderStatus,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a pending order owned by `user_id`
    pub async fn create(&self, user_id: &str, data: OrderCreate) -> RepoResult<Order> {
        let now = shared::util::now_millis();
        let doc = OrderDoc {
            user_id: user_id.to_string(),
            data,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.base.create(TABLE, serde_json::to_value(doc)?).await
    }

    /// Orders of one user, newest first (ties broken by key, descending)
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Order>> {
        // ORDER BY + WHERE + LIMIT can drop rows on the embedded engine; cap after sorting
        let mut orders: Vec<Order> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM {TABLE} WHERE userId = $uid ORDER BY createdAt DESC, id DESC"
            ))
            .bind(("uid", user_id.to_string()))
            .await?
            .take(0)?;
        orders.truncate(LIST_LIMIT);
        Ok(orders)
    }

    /// One order, only if owned by `user_id`
    pub async fn find_for_user(&self, id: &str, user_id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::thing($tb, $key) WHERE userId = $uid"
            ))
            .bind(("tb", TABLE))
            .bind(("key", id.to_string()))
            .bind(("uid", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(order)
    }

    /// Set the status; `false` if the order does not exist
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<bool> {
        #[derive(Serialize)]
        struct StatusPatch {
            status: OrderStatus,
        }

        let updated: Option<Order> = self.base.merge(TABLE, id, &StatusPatch { status }).await?;
        Ok(updated.is_some())
    }
}
