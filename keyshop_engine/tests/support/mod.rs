//! Shared scaffolding for the integration tests: every test gets its own throwaway SQLite database.
use keyshop_engine::{
    db_types::User,
    sqlite::{db, SqliteDatabase},
};
use log::*;
use sqlx::{migrate::MigrateDatabase, Sqlite};

pub async fn prepare_test_env(url: &str) -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    create_database(url).await;
    let db = SqliteDatabase::new_with_url(url, 5).await.expect("Error creating connection to database");
    db::run_migrations(db.pool()).await.expect("Error running DB migrations");
    debug!("🚀️ Test database ready at {url}");
    db
}

pub fn random_db_path() -> String {
    format!("sqlite://{}/keyshop_test_{}.db", std::env::temp_dir().display(), rand::random::<u64>())
}

async fn create_database(url: &str) {
    if let Err(e) = Sqlite::drop_database(url).await {
        warn!("Error dropping database {url}: {e:?}");
    }
    Sqlite::create_database(url).await.expect("Error creating database");
    info!("Created Sqlite database {url}");
}

/// Flips the sold flag the way the shop operator would, out of band. No API in the engine does this.
pub async fn mark_key_sold(key_id: i64, db: &SqliteDatabase) {
    sqlx::query("UPDATE keys SET sold = 1 WHERE id = $1")
        .bind(key_id)
        .execute(db.pool())
        .await
        .expect("Error marking key sold");
}

pub async fn fetch_user(user_id: i64, db: &SqliteDatabase) -> Option<User> {
    sqlx::query_as("SELECT * FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(db.pool())
        .await
        .expect("Error fetching user")
}
