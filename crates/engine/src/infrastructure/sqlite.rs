//! SQLite wishlist repository.
//!
//! One row per wishlist. The item map and the ordering array are stored as
//! JSON columns, mirroring the record shape of a document/key-value store:
//!
//! - `save_new` leans on the primary key as the create-if-absent condition.
//! - `save_new_item` updates both JSON columns in a single UPDATE statement,
//!   so map-insert and order-append are one atomic storage operation.
//! - reorders read only the ordering column, edit it in memory, and write
//!   the whole column back. There is no version check on the write-back:
//!   concurrent reorders on the same wishlist are last-writer-wins.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use wishlist_domain::{Item, Wishlist, WishlistId};

use super::order::move_to_index;
use super::ports::{RepoError, UpdateItemCommand, WishlistRepo};

/// SQLite implementation of [`WishlistRepo`].
pub struct SqliteWishlistRepo {
    pool: SqlitePool,
}

impl SqliteWishlistRepo {
    /// Creates the repository, setting up the schema if needed.
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS wishlists (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                item_map TEXT NOT NULL DEFAULT '{}',
                item_order_by_id TEXT NOT NULL DEFAULT '[]'
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl WishlistRepo for SqliteWishlistRepo {
    async fn get_by_id(&self, wishlist_id: WishlistId) -> Result<Wishlist, RepoError> {
        let row: Option<(String, String, String, String, String)> = sqlx::query_as(
            "SELECT owner_id, name, created_at, item_map, item_order_by_id \
             FROM wishlists WHERE id = ?",
        )
        .bind(wishlist_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("get_by_id", e))?;

        let Some((owner_id, name, created_at, item_map, item_order_by_id)) = row else {
            return Err(RepoError::not_found("Wishlist", wishlist_id));
        };

        let owner_id = owner_id
            .parse()
            .map_err(|e| RepoError::Serialization(format!("bad owner_id: {e}")))?;
        let created_at: DateTime<Utc> = created_at
            .parse()
            .map_err(|e| RepoError::Serialization(format!("bad created_at: {e}")))?;
        let item_map: HashMap<String, Item> = serde_json::from_str(&item_map)
            .map_err(|e| RepoError::Serialization(format!("bad item_map: {e}")))?;
        let order: Vec<String> = serde_json::from_str(&item_order_by_id)
            .map_err(|e| RepoError::Serialization(format!("bad item_order_by_id: {e}")))?;

        let mut items = Vec::with_capacity(order.len());
        for item_id in &order {
            let item = item_map.get(item_id).ok_or_else(|| RepoError::Corrupted {
                wishlist_id: wishlist_id.to_string(),
                item_id: item_id.clone(),
            })?;
            items.push(item.clone());
        }

        Ok(Wishlist::rehydrate(
            wishlist_id, owner_id, name, created_at, items,
        ))
    }

    async fn save_new(&self, wishlist: &Wishlist) -> Result<(), RepoError> {
        let item_map: HashMap<String, &Item> = wishlist
            .items()
            .iter()
            .map(|item| (item.id().to_string(), item))
            .collect();
        let order: Vec<String> = wishlist
            .items()
            .iter()
            .map(|item| item.id().to_string())
            .collect();

        let item_map = serde_json::to_string(&item_map)
            .map_err(|e| RepoError::Serialization(e.to_string()))?;
        let order =
            serde_json::to_string(&order).map_err(|e| RepoError::Serialization(e.to_string()))?;

        let result = sqlx::query(
            "INSERT INTO wishlists (id, owner_id, name, created_at, item_map, item_order_by_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(wishlist.id().to_string())
        .bind(wishlist.owner_id().to_string())
        .bind(wishlist.name())
        .bind(wishlist.created_at().to_rfc3339())
        .bind(item_map)
        .bind(order)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(RepoError::AlreadyExists {
                    id: wishlist.id().to_string(),
                })
            }
            Err(e) => Err(RepoError::database("save_new", e)),
        }
    }

    async fn save_new_item(&self, wishlist_id: WishlistId, item: &Item) -> Result<(), RepoError> {
        let item_json =
            serde_json::to_string(item).map_err(|e| RepoError::Serialization(e.to_string()))?;
        // JSON path for the map entry keyed by the new item's id.
        let map_path = format!("$.\"{}\"", item.id());

        // Map-insert and order-append in one statement, so they apply
        // atomically against the row.
        let result = sqlx::query(
            "UPDATE wishlists SET \
                item_map = json_set(item_map, ?, json(?)), \
                item_order_by_id = json_insert(item_order_by_id, '$[#]', ?) \
             WHERE id = ?",
        )
        .bind(map_path)
        .bind(item_json)
        .bind(item.id().to_string())
        .bind(wishlist_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_new_item", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Wishlist", wishlist_id));
        }
        Ok(())
    }

    async fn update_item(&self, command: &UpdateItemCommand) -> Result<(), RepoError> {
        if command.is_noop() {
            return Ok(());
        }

        if let Some(new_index) = command.new_index() {
            // Narrow projection: only the ordering array is read.
            let row: Option<(String,)> =
                sqlx::query_as("SELECT item_order_by_id FROM wishlists WHERE id = ?")
                    .bind(command.wishlist_id().to_string())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| RepoError::database("update_item", e))?;

            let Some((order_json,)) = row else {
                return Err(RepoError::not_found("Wishlist", command.wishlist_id()));
            };

            let mut order: Vec<String> = serde_json::from_str(&order_json)
                .map_err(|e| RepoError::Serialization(format!("bad item_order_by_id: {e}")))?;

            if !move_to_index(&mut order, &command.item_id().to_string(), new_index) {
                return Err(RepoError::not_found("Item", command.item_id()));
            }

            let order = serde_json::to_string(&order)
                .map_err(|e| RepoError::Serialization(e.to_string()))?;

            // Whole-field replace; the store has no positional list edit.
            sqlx::query("UPDATE wishlists SET item_order_by_id = ? WHERE id = ?")
                .bind(order)
                .bind(command.wishlist_id().to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("update_item", e))?;
        }
        Ok(())
    }
}
