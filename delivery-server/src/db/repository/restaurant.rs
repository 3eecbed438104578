//! Restaurant Repository

use serde::Serialize;
use shared::models::{Restaurant, RestaurantCreate, RestaurantQuery, RestaurantUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, SELECT_FIELDS};

pub const TABLE: &str = "restaurants";

/// Listing cap, same as the storefront page size ceiling
const LIST_LIMIT: usize = 1000;

/// Category values that select restaurants running a promotion
const PROMO_ALIASES: [&str; 4] = ["promocões", "promoções", "promocoes", "promo"];

/// Restaurant listing filter, built from the query string
///
/// Clauses are ANDed; every string match is a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    /// Only restaurants with a promotion
    pub promo_only: bool,
    /// Cuisine contains it, or the category tags contain it exactly
    pub category: Option<String>,
    /// Name, description or cuisine contains it
    pub search: Option<String>,
}

impl RestaurantFilter {
    pub fn from_query(query: &RestaurantQuery) -> Self {
        let mut filter = Self::default();

        if let Some(category) = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
        {
            let lowered = category.to_lowercase();
            if PROMO_ALIASES.contains(&lowered.as_str()) {
                filter.promo_only = true;
            } else {
                filter.category = Some(category.to_string());
            }
        }

        filter.search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        filter
    }

    /// WHERE clause (without the keyword), `None` when nothing filters
    pub fn where_clause(&self) -> Option<String> {
        let mut clauses = Vec::new();
        if self.promo_only {
            clauses.push("(promo != NONE AND promo != NULL)".to_string());
        }
        if self.category.is_some() {
            clauses.push(
                "(string::contains(string::lowercase(cuisine), $category_lc) OR categories CONTAINS $category)"
                    .to_string(),
            );
        }
        if self.search.is_some() {
            clauses.push(
                "(string::contains(string::lowercase(name), $search_lc) \
                 OR string::contains(string::lowercase(description), $search_lc) \
                 OR string::contains(string::lowercase(cuisine), $search_lc))"
                    .to_string(),
            );
        }
        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" AND "))
        }
    }
}

/// Stored restaurant document (create payload + timestamps)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RestaurantDoc {
    #[serde(flatten)]
    data: RestaurantCreate,
    created_at: i64,
    updated_at: i64,
}

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find restaurants matching the filter
    pub async fn find_all(&self, filter: &RestaurantFilter) -> RepoResult<Vec<Restaurant>> {
        let mut sql = format!("SELECT {SELECT_FIELDS} FROM {TABLE}");
        if let Some(clause) = filter.where_clause() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
        sql.push_str(&format!(" LIMIT {LIST_LIMIT}"));

        let category = filter.category.clone().unwrap_or_default();
        let search = filter.search.clone().unwrap_or_default();

        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query(sql)
            .bind(("category_lc", category.to_lowercase()))
            .bind(("category", category))
            .bind(("search_lc", search.to_lowercase()))
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Find restaurant by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        self.base.find_by_key(TABLE, id).await
    }

    pub async fn exists(&self, id: &str) -> RepoResult<bool> {
        self.base.exists(TABLE, id).await
    }

    /// Restaurant name, `None` if the restaurant no longer exists
    pub async fn name_of(&self, id: &str) -> RepoResult<Option<String>> {
        #[derive(serde::Deserialize)]
        struct NameRow {
            name: String,
        }

        let row: Option<NameRow> = self
            .base
            .db()
            .query("SELECT name FROM type::thing($tb, $key)")
            .bind(("tb", TABLE))
            .bind(("key", id.to_string()))
            .await?
            .take(0)?;
        Ok(row.map(|r| r.name))
    }

    /// Create a new restaurant
    pub async fn create(&self, data: RestaurantCreate) -> RepoResult<Restaurant> {
        let now = shared::util::now_millis();
        let doc = RestaurantDoc {
            data,
            created_at: now,
            updated_at: now,
        };
        self.base.create(TABLE, serde_json::to_value(doc)?).await
    }

    /// Merge present fields; `None` if the restaurant does not exist
    pub async fn update(&self, id: &str, data: RestaurantUpdate) -> RepoResult<Option<Restaurant>> {
        self.base.merge(TABLE, id, &data).await
    }

    /// Delete a restaurant; `false` if it did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.delete(TABLE, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>, search: Option<&str>) -> RestaurantQuery {
        RestaurantQuery {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn no_params_means_no_filter() {
        let filter = RestaurantFilter::from_query(&query(None, None));
        assert_eq!(filter, RestaurantFilter::default());
        assert_eq!(filter.where_clause(), None);
    }

    #[test]
    fn all_category_means_no_filter() {
        assert_eq!(
            RestaurantFilter::from_query(&query(Some("all"), None)).where_clause(),
            None
        );
        assert_eq!(
            RestaurantFilter::from_query(&query(Some("ALL"), Some("  "))).where_clause(),
            None
        );
    }

    #[test]
    fn promo_aliases_select_promotions() {
        for alias in ["Promocões", "promocoes", "Promoções", "PROMO"] {
            let filter = RestaurantFilter::from_query(&query(Some(alias), None));
            assert!(filter.promo_only, "{alias}");
            assert_eq!(filter.category, None);
            assert!(filter.where_clause().unwrap().contains("promo != NONE"));
        }
    }

    #[test]
    fn category_and_search_are_combined() {
        let filter = RestaurantFilter::from_query(&query(Some("Pizza"), Some("napoli")));
        assert_eq!(filter.category.as_deref(), Some("Pizza"));
        assert_eq!(filter.search.as_deref(), Some("napoli"));

        let clause = filter.where_clause().unwrap();
        assert!(clause.contains("categories CONTAINS $category"));
        assert!(clause.contains("$search_lc"));
        assert!(clause.contains(") AND ("));
    }
}
