use keyshop_engine::{traits::StoreError, CatalogError, OrderFlowError, UserApiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Could not initialize the bot. {0}")]
    InitializeError(String),
    #[error("Invalid bot configuration. {0}")]
    ConfigurationError(String),
    #[error("Telegram API error. {0}")]
    RequestError(#[from] teloxide::RequestError),
    #[error("{0}")]
    OrderFlowError(#[from] OrderFlowError),
    #[error("{0}")]
    CatalogError(#[from] CatalogError),
    #[error("{0}")]
    UserApiError(#[from] UserApiError),
    #[error("{0}")]
    StoreError(#[from] StoreError),
}
