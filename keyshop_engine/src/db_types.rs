use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use ks_common::Sats;
use log::error;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

//--------------------------------------        User         ---------------------------------------------------------
/// A customer of the shop. One record per Telegram identity, created on first contact and never deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// The user id assigned by Telegram
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------       NewUser       ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewUser {
    /// The user id assigned by Telegram
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl NewUser {
    pub fn new(user_id: i64) -> Self {
        Self { user_id, username: None, first_name: None }
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_first_name(mut self, first_name: String) -> Self {
        self.first_name = Some(first_name);
        self
    }
}

//--------------------------------------       GameKey       ---------------------------------------------------------
/// A sellable game key. The `code` is the secret the buyer is paying for.
///
/// Nothing in the order flow flips `sold`; creating an order leaves the key on offer until the operator marks it
/// sold out of band.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GameKey {
    pub id: i64,
    pub game: String,
    pub code: String,
    pub price: Sats,
    pub sold: bool,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------      NewGameKey     ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameKey {
    pub game: String,
    pub code: String,
    pub price: Sats,
}

impl NewGameKey {
    pub fn new<S: Into<String>>(game: S, code: S, price: Sats) -> Self {
        Self { game: game.into(), code: code.into(), price }
    }
}

//--------------------------------------   OrderStatusType   ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum OrderStatusType {
    /// The order has been created and is waiting for the buyer's manual payment.
    Pending,
    /// The operator has confirmed receipt of payment.
    Paid,
    /// The order was cancelled by the operator.
    Cancelled,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "Pending"),
            OrderStatusType::Paid => write!(f, "Paid"),
            OrderStatusType::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl From<String> for OrderStatusType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            error!("Invalid order status: {value}. But this conversion cannot fail. Defaulting to Pending");
            OrderStatusType::Pending
        })
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Paid" => Ok(Self::Paid),
            "Cancelled" => Ok(Self::Cancelled),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------        Order        ---------------------------------------------------------
/// A buyer's claim against a specific key. Immutable once created; the status only ever moves out of `Pending`
/// through operator action, which is outside this crate.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// The Telegram user id of the buyer
    pub customer_id: i64,
    /// The key this order reserves
    pub key_id: i64,
    /// The key's price at the moment the order was placed
    pub total_price: Sats,
    pub status: OrderStatusType,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------       NewOrder      ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i64,
    pub key_id: i64,
    pub total_price: Sats,
}

impl NewOrder {
    pub fn new(customer_id: i64, key_id: i64, total_price: Sats) -> Self {
        Self { customer_id, key_id, total_price }
    }
}
