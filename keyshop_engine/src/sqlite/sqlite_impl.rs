//! `SqliteDatabase` is the concrete SQLite implementation of the shop's record store.
//!
//! It implements the [`ShopDatabase`] trait by forwarding to the low-level functions in the [`super::db`]
//! module with a connection acquired from its pool.
use std::fmt::Debug;

use sqlx::SqlitePool;

use super::db::{keys, new_pool, orders, users};
use crate::{
    db_types::{GameKey, NewGameKey, NewOrder, NewUser, Order},
    traits::{ShopDatabase, StoreError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Opens a connection pool against `url`. The database file must already exist; see
    /// [`super::db::create_database_if_missing`].
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl ShopDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn upsert_user(&self, user: NewUser) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        users::upsert_user(user, &mut conn).await
    }

    async fn insert_key(&self, key: NewGameKey) -> Result<GameKey, StoreError> {
        let mut conn = self.pool.acquire().await?;
        keys::insert_key(key, &mut conn).await
    }

    async fn fetch_key_by_id(&self, key_id: i64) -> Result<Option<GameKey>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let key = keys::fetch_key_by_id(key_id, &mut conn).await?;
        Ok(key)
    }

    async fn fetch_unsold_keys(&self) -> Result<Vec<GameKey>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let keys = keys::fetch_unsold_keys(&mut conn).await?;
        Ok(keys)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::insert_order(order, &mut conn).await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let orders = orders::fetch_all_orders(&mut conn).await?;
        Ok(orders)
    }
}
