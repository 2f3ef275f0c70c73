use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewOrder, Order},
    shop_api::errors::OrderFlowError,
    traits::ShopDatabase,
};

/// `OrderFlowApi` owns the order lifecycle. A buyer reserves a key, which creates an order in `Pending` status;
/// settlement is manual and happens outside this crate.
#[derive(Clone)]
pub struct OrderFlowApi<B> {
    db: B,
}

impl<B> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B> OrderFlowApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrderFlowApi<B>
where B: ShopDatabase
{
    /// Reserves the key identified by `key_id` for the given buyer.
    ///
    /// The key must exist and must not have been marked sold, otherwise [`OrderFlowError::KeyUnavailable`] is
    /// returned and nothing is written. On success a new order is created with status `Pending` and the key's
    /// current price as the amount due, and returned for reply formatting.
    ///
    /// Reserving does not mark the key sold, and there is no conditional write guarding the reservation: two
    /// buyers who press the same button at the same time both end up with a pending order against the key.
    pub async fn reserve_key(&self, key_id: i64, customer_id: i64) -> Result<Order, OrderFlowError> {
        let key = self
            .db
            .fetch_key_by_id(key_id)
            .await?
            .filter(|k| !k.sold)
            .ok_or(OrderFlowError::KeyUnavailable)?;
        let order = self.db.insert_order(NewOrder::new(customer_id, key.id, key.price)).await?;
        debug!("📦️ Order #{} reserves key #{} for customer {} at {}", order.id, key.id, customer_id, order.total_price);
        Ok(order)
    }

    /// Every order ever placed, unfiltered, in store order.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, OrderFlowError> {
        let orders = self.db.fetch_orders().await?;
        Ok(orders)
    }
}
