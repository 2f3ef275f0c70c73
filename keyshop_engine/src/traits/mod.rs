//! # Database management and control.
//!
//! This module defines the interface contract that a storage backend must expose in order to act as the record
//! store for the shop.
//!
//! The shop keeps three independent record collections: customers ([`crate::db_types::User`]), keys for sale
//! ([`crate::db_types::GameKey`]), and orders ([`crate::db_types::Order`]). The [`ShopDatabase`] trait covers
//! the handful of single-record reads and writes the shop performs against them. There are no transactions and
//! no pagination; full scans are acceptable at this scale.
mod shop_database;

pub use shop_database::{ShopDatabase, StoreError};
