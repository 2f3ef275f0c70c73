use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{GameKey, NewGameKey},
    traits::StoreError,
};

/// Inserts a new key into the catalogue. The key starts out unsold.
pub async fn insert_key(key: NewGameKey, conn: &mut SqliteConnection) -> Result<GameKey, StoreError> {
    let key: GameKey = sqlx::query_as(
        r#"
            INSERT INTO keys (game, code, price)
            VALUES ($1, $2, $3)
            RETURNING *;
        "#,
    )
    .bind(key.game)
    .bind(key.code)
    .bind(key.price)
    .fetch_one(conn)
    .await?;
    debug!("🗝️ Key [{}] inserted with id {}", key.game, key.id);
    Ok(key)
}

/// Returns the key with the given store id, whether sold or not.
pub async fn fetch_key_by_id(key_id: i64, conn: &mut SqliteConnection) -> Result<Option<GameKey>, sqlx::Error> {
    let key = sqlx::query_as("SELECT * FROM keys WHERE id = $1").bind(key_id).fetch_optional(conn).await?;
    Ok(key)
}

/// Returns all keys that have not been marked sold. The filter is on the `sold` flag only; a key with an open
/// order against it is still returned.
pub async fn fetch_unsold_keys(conn: &mut SqliteConnection) -> Result<Vec<GameKey>, sqlx::Error> {
    let keys = sqlx::query_as("SELECT * FROM keys WHERE sold = 0 ORDER BY id").fetch_all(conn).await?;
    Ok(keys)
}
