use std::env;

use keyshop_engine::sqlite::db::db_url;
use ks_common::Secret;
use log::*;

use crate::errors::BotError;

/// Runtime configuration for the bot. Read from the environment once at startup and immutable for the life of
/// the process.
#[derive(Clone, Debug, Default)]
pub struct BotConfig {
    /// The Telegram bot API token (`KS_BOT_TOKEN`). Required.
    pub token: Secret<String>,
    /// The Telegram user id of the one administrator (`KS_ADMIN_ID`). Required for the admin surface to be
    /// usable; with it unset, every admin command is refused.
    pub admin_id: i64,
    /// The static address buyers are told to send payment to (`KS_PAYMENT_ADDRESS`). Required.
    pub payment_address: String,
    /// Where the shop records live (`KS_DATABASE_URL`, default `sqlite://data/keyshop.db`).
    pub database_url: String,
}

impl BotConfig {
    pub fn from_env_or_default() -> Self {
        let token = Secret::new(env::var("KS_BOT_TOKEN").unwrap_or_default());
        let admin_id = env::var("KS_ADMIN_ID")
            .map(|s| {
                s.parse::<i64>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid Telegram user id for KS_ADMIN_ID. {e}. Admin access is disabled.");
                    0
                })
            })
            .unwrap_or_default();
        let payment_address = env::var("KS_PAYMENT_ADDRESS").unwrap_or_default();
        let database_url = db_url();
        Self { token, admin_id, payment_address, database_url }
    }

    /// Checks the values that have no usable default. Telegram user ids are never 0, so an unset admin id can
    /// not accidentally match a caller; it only disables the admin surface, which gets a warning rather than an
    /// error.
    pub fn assert_ready(&self) -> Result<(), BotError> {
        if self.token.reveal().is_empty() {
            return Err(BotError::ConfigurationError("KS_BOT_TOKEN is not set".to_string()));
        }
        if self.payment_address.is_empty() {
            return Err(BotError::ConfigurationError("KS_PAYMENT_ADDRESS is not set".to_string()));
        }
        if self.admin_id == 0 {
            warn!("🪛️ KS_ADMIN_ID is not set. Every admin command will be refused.");
        }
        Ok(())
    }
}
