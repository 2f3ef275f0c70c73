//! # Keyshop bot
//! This crate hosts the Telegram-facing side of the key shop. It is responsible for:
//! Routing inbound commands and button presses to the right handler.
//! Enforcing the single-administrator authorization check.
//! Turning engine results into reply text and inline menus.
//!
//! Everything below the handlers — records, catalogue, order flow — lives in `keyshop_engine`; this crate never
//! talks to the database directly.
//!
//! ## Configuration
//! The bot is configured via environment variables. See [config](config/index.html) for more information.

pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod menus;
pub mod routes;
pub mod server;

use keyshop_engine::{CatalogApi, OrderFlowApi, SqliteDatabase, UserApi};

use crate::config::BotConfig;

/// Everything a handler needs: the engine APIs over one shared store, and the static bits of configuration the
/// replies mention. Cloned into every handler invocation by the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub users: UserApi<SqliteDatabase>,
    pub catalog: CatalogApi<SqliteDatabase>,
    pub orders: OrderFlowApi<SqliteDatabase>,
    pub admin_id: i64,
    pub payment_address: String,
}

impl AppState {
    pub fn new(db: SqliteDatabase, config: &BotConfig) -> Self {
        Self {
            users: UserApi::new(db.clone()),
            catalog: CatalogApi::new(db.clone()),
            orders: OrderFlowApi::new(db),
            admin_id: config.admin_id,
            payment_address: config.payment_address.clone(),
        }
    }
}
