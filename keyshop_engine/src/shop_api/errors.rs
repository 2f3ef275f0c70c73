use thiserror::Error;

use crate::{helpers::KeySpecError, traits::StoreError};

#[derive(Debug, Error)]
pub enum OrderFlowError {
    /// The requested key does not exist, or has already been marked sold.
    #[error("The key is no longer available")]
    KeyUnavailable,
    #[error("{0}")]
    StoreError(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid key listing. {0}")]
    InvalidKeySpec(#[from] KeySpecError),
    #[error("{0}")]
    StoreError(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum UserApiError {
    #[error("{0}")]
    StoreError(#[from] StoreError),
}
