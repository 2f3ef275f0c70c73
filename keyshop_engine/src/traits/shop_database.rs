use thiserror::Error;

use crate::db_types::{GameKey, NewGameKey, NewOrder, NewUser, Order};

/// This trait defines the behaviour a backend must expose to act as the record store for the shop.
///
/// All operations are single-record lookups, inserts or updates. Implementations surface any connectivity or
/// driver fault as [`StoreError::DatabaseError`]; the caller treats that as fatal for the current request and
/// never retries.
#[allow(async_fn_in_trait)]
pub trait ShopDatabase: Clone {
    /// The URL of the backing store
    fn url(&self) -> &str;

    /// Stores the user if this identity has never been seen before. A conflicting re-registration is a no-op:
    /// the profile stored on first contact wins.
    async fn upsert_user(&self, user: NewUser) -> Result<(), StoreError>;

    /// Puts a new key up for sale (`sold = false`). Returns the stored record.
    async fn insert_key(&self, key: NewGameKey) -> Result<GameKey, StoreError>;

    /// Fetches a single key by its store id, sold or not.
    async fn fetch_key_by_id(&self, key_id: i64) -> Result<Option<GameKey>, StoreError>;

    /// Every key with `sold = false`, in store order.
    async fn fetch_unsold_keys(&self) -> Result<Vec<GameKey>, StoreError>;

    /// Stores a new order and returns the record with its assigned id.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError>;

    /// Every order ever placed, unfiltered, in store order.
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("We have an internal store fault (configuration/uptime etc.): {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}
