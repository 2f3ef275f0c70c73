use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order},
    traits::StoreError,
};

/// Inserts a new order. The status column defaults to `Pending` in the schema.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, StoreError> {
    let order: Order = sqlx::query_as(
        r#"
            INSERT INTO orders (customer_id, key_id, total_price)
            VALUES ($1, $2, $3)
            RETURNING *;
        "#,
    )
    .bind(order.customer_id)
    .bind(order.key_id)
    .bind(order.total_price)
    .fetch_one(conn)
    .await?;
    debug!("📝️ Order inserted with id {}", order.id);
    Ok(order)
}

/// Returns every order, in insertion order.
pub async fn fetch_all_orders(conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    let orders = sqlx::query_as("SELECT * FROM orders ORDER BY id").fetch_all(conn).await?;
    Ok(orders)
}
