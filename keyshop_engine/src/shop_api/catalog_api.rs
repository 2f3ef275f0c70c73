use std::fmt::Debug;

use log::*;

use crate::{db_types::GameKey, helpers::parse_key_spec, shop_api::errors::CatalogError, traits::ShopDatabase};

/// `CatalogApi` manages the sale catalogue: listing the keys that are still for sale and putting new keys up
/// for sale.
#[derive(Clone)]
pub struct CatalogApi<B> {
    db: B,
}

impl<B> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi")
    }
}

impl<B> CatalogApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> CatalogApi<B>
where B: ShopDatabase
{
    /// Returns every key that has not been marked sold, in store order.
    ///
    /// A key with a pending order against it is still returned. Nothing flips the sold flag when an order is
    /// created, so a reserved key stays on offer until the operator marks it sold.
    pub async fn available_keys(&self) -> Result<Vec<GameKey>, CatalogError> {
        let keys = self.db.fetch_unsold_keys().await?;
        trace!("🗝️ {} keys are in stock", keys.len());
        Ok(keys)
    }

    /// Parses a `Game|Key|Price` listing and puts the key up for sale.
    ///
    /// A malformed listing is rejected before anything is written; there is no partial insert.
    pub async fn add_key(&self, listing: &str) -> Result<GameKey, CatalogError> {
        let new_key = parse_key_spec(listing)?;
        let key = self.db.insert_key(new_key).await?;
        debug!("🗝️ Key #{} for {} is up for sale at {}", key.id, key.game, key.price);
        Ok(key)
    }
}
