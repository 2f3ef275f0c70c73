//! # Keyshop Engine
//!
//! The keyshop engine is the storage and order-flow layer of a small shop that sells game keys for bitcoin.
//! It is transport-agnostic: the Telegram bot sits on top of this crate, but nothing in here knows about chat
//! messages or keyboards.
//!
//! The crate is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the only supported backend. You should never
//!    need to access the database directly. Instead, use the APIs in [`mod@shop_api`]. The exception is the data
//!    types stored in the database. These are defined in the `db_types` module and are public.
//! 2. The shop API ([`mod@shop_api`]). [`CatalogApi`] manages the keys that are up for sale, [`OrderFlowApi`]
//!    owns the reservation flow, and [`UserApi`] tracks customers. A backend acts as a store for the shop by
//!    implementing the [`traits::ShopDatabase`] trait.

pub mod db_types;
pub mod helpers;
mod shop_api;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

pub use shop_api::{
    errors::{CatalogError, OrderFlowError, UserApiError},
    CatalogApi,
    OrderFlowApi,
    UserApi,
};
