use log::debug;
use sqlx::SqliteConnection;

use crate::{db_types::NewUser, traits::StoreError};

/// Stores the user with insert-only-on-new semantics: if the Telegram id is already known, the row is left
/// untouched and the incoming profile fields are discarded.
pub async fn upsert_user(user: NewUser, conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let user_id = user.user_id;
    let result = sqlx::query(
        r#"
            INSERT INTO users (user_id, username, first_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO NOTHING;
        "#,
    )
    .bind(user.user_id)
    .bind(user.username)
    .bind(user.first_name)
    .execute(conn)
    .await?;
    if result.rows_affected() > 0 {
        debug!("👤️ New user {user_id} stored");
    }
    Ok(())
}
