//! User Repository

use serde::{Deserialize, Serialize};
use shared::models::{UserAddress, UserResponse, UserUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, SELECT_FIELDS, WRITE_ATTEMPTS, is_retryable};

pub const TABLE: &str = "users";

/// Stored user document
///
/// Addresses are stored without a meaningful `isDefault`; the default is the
/// single `defaultAddress` index, so at most one address can ever be default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    #[serde(default)]
    pub addresses: Vec<UserAddress>,
    #[serde(default)]
    pub default_address: Option<usize>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        let addresses = user
            .addresses
            .into_iter()
            .enumerate()
            .map(|(index, address)| UserAddress {
                is_default: user.default_address == Some(index),
                ..address
            })
            .collect();

        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            addresses,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration data, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDoc {
    name: String,
    email: String,
    password_hash: String,
    phone: String,
    addresses: Vec<UserAddress>,
    created_at: i64,
    updated_at: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatedRow {
    #[allow(dead_code)]
    updated_at: i64,
}

/// Append; the new address takes the default when flagged or when it is the first one
const PUSH_ADDRESS: &str = "UPDATE type::thing($tb, $key) SET \
     defaultAddress = IF $make_default OR (array::len(addresses) = 0) THEN array::len(addresses) ELSE defaultAddress END, \
     addresses += $address, \
     updatedAt = $now \
     WHERE email != NONE \
     RETURN AFTER";

/// Replace in place; a non-default replacement of the default address leaves no default
const REPLACE_ADDRESS: &str = "UPDATE type::thing($tb, $key) SET \
     defaultAddress = IF $make_default THEN $index ELSE IF (defaultAddress = $index) THEN NONE ELSE defaultAddress END, \
     addresses = array::insert(array::remove(addresses, $index), $address, $index), \
     updatedAt = $now \
     WHERE array::len(addresses) > $index \
     RETURN AFTER";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<UserRecord>> {
        self.base.find_by_key(TABLE, id).await
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserRecord>> {
        let mut result = self
            .base
            .db()
            .query(format!("SELECT {SELECT_FIELDS} FROM {TABLE} WHERE email = $email LIMIT 1"))
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<UserRecord> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a user
    ///
    /// The unique index on `email` backs the pre-check, so a concurrent
    /// registration still surfaces as [`RepoError::Duplicate`].
    pub async fn create(&self, user: NewUser) -> RepoResult<UserRecord> {
        let mut attempt = 1;
        loop {
            match self.try_create(&user).await {
                Err(RepoError::Conflict(msg)) if attempt < WRITE_ATTEMPTS => {
                    tracing::debug!(attempt, error = %msg, "User create conflicted, retrying");
                    attempt += 1;
                    tokio::task::yield_now().await;
                }
                result => return result,
            }
        }
    }

    async fn try_create(&self, user: &NewUser) -> RepoResult<UserRecord> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User '{}' already exists",
                user.email
            )));
        }

        let now = shared::util::now_millis();
        let doc = UserDoc {
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            phone: user.phone.clone(),
            addresses: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.base.create(TABLE, serde_json::to_value(doc)?).await
    }

    /// Merge name/phone; `None` if the user does not exist
    pub async fn update_profile(&self, id: &str, data: UserUpdate) -> RepoResult<Option<UserRecord>> {
        self.base.merge(TABLE, id, &data).await
    }

    /// Append an address in one statement; `false` if the user does not exist
    pub async fn push_address(&self, id: &str, address: UserAddress) -> RepoResult<bool> {
        self.write_address(PUSH_ADDRESS, id, 0, address).await
    }

    /// Replace the address at `index` in one statement
    ///
    /// `false` if the user does not exist or the index is out of range.
    pub async fn replace_address(
        &self,
        id: &str,
        index: usize,
        address: UserAddress,
    ) -> RepoResult<bool> {
        self.write_address(REPLACE_ADDRESS, id, index, address).await
    }

    async fn write_address(
        &self,
        statement: &'static str,
        id: &str,
        index: usize,
        address: UserAddress,
    ) -> RepoResult<bool> {
        let make_default = address.is_default;
        let stored = serde_json::to_value(UserAddress {
            is_default: false,
            ..address
        })?;

        let mut attempt = 1;
        loop {
            let result = self
                .base
                .db()
                .query(statement)
                .bind(("tb", TABLE))
                .bind(("key", id.to_string()))
                .bind(("address", stored.clone()))
                .bind(("make_default", make_default))
                .bind(("index", index))
                .bind(("now", shared::util::now_millis()))
                .await
                .and_then(|mut response| response.take::<Vec<UpdatedRow>>(0));

            match result {
                Ok(rows) => return Ok(!rows.is_empty()),
                Err(e) if attempt < WRITE_ATTEMPTS && is_retryable(&e) => {
                    tracing::debug!(attempt, user_id = %id, "Address write conflicted, retrying");
                    attempt += 1;
                    tokio::task::yield_now().await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(label: &str, is_default: bool) -> UserAddress {
        UserAddress {
            label: label.to_string(),
            street: "Rua A".to_string(),
            city: "Lisboa".to_string(),
            postal_code: "1000-001".to_string(),
            is_default,
        }
    }

    fn record(addresses: Vec<UserAddress>, default_address: Option<usize>) -> UserRecord {
        UserRecord {
            id: shared::util::new_record_key(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            phone: String::new(),
            addresses,
            default_address,
            created_at: 1,
            updated_at: 1,
        }
    }

    fn defaults(response: &UserResponse) -> Vec<bool> {
        response.addresses.iter().map(|a| a.is_default).collect()
    }

    #[test]
    fn default_flag_follows_stored_index() {
        // stored flags are ignored, only the index counts
        let user = record(
            vec![addr("Home", true), addr("Work", false), addr("Gym", true)],
            Some(1),
        );
        let response = UserResponse::from(user);
        assert_eq!(defaults(&response), vec![false, true, false]);
    }

    #[test]
    fn no_index_means_no_default() {
        let response = UserResponse::from(record(vec![addr("Home", true)], None));
        assert_eq!(defaults(&response), vec![false]);
    }

    #[test]
    fn stale_index_marks_nothing() {
        let response = UserResponse::from(record(vec![addr("Home", false)], Some(4)));
        assert_eq!(defaults(&response), vec![false]);
    }

    #[test]
    fn response_never_carries_password_hash() {
        let json = serde_json::to_value(UserResponse::from(record(vec![], None))).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["email"], "ana@example.com");
    }
}
