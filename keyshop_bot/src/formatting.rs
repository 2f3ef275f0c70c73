//! Reply texts. Pure functions from domain results to the strings the bot sends. Keeping them together, and
//! free of side effects, makes the wording easy to test and tweak without touching any handler.
use keyshop_engine::db_types::{GameKey, Order};
use ks_common::{Sats, BTC_CURRENCY_CODE};

pub fn welcome_text() -> String {
    "Welcome to the game key shop! Use /shop to browse the catalogue.".to_string()
}

pub fn no_stock_text() -> String {
    "No keys in stock right now. Check back later!".to_string()
}

pub fn catalog_prompt() -> String {
    "Pick a game to purchase:".to_string()
}

/// The reply a buyer gets after reserving a key. Contains the amount due and the address to pay.
pub fn payment_instructions(amount: Sats, payment_address: &str) -> String {
    format!("To complete the purchase, send {amount} to:\n{payment_address}")
}

pub fn key_unavailable_text() -> String {
    "That key has already been sold or is unavailable.".to_string()
}

pub fn admin_panel_text() -> String {
    "Admin panel".to_string()
}

pub fn admin_refusal_text() -> String {
    "You do not have access to the admin panel.".to_string()
}

pub fn add_key_prompt() -> String {
    format!("Send the key listing as:\nGame|Key|Price ({BTC_CURRENCY_CODE})")
}

pub fn key_added_text(key: &GameKey) -> String {
    format!("Key for {} added successfully!", key.game)
}

pub fn invalid_listing_text() -> String {
    "Could not read that listing. Check the format and try again.".to_string()
}

pub fn no_orders_text() -> String {
    "No orders yet.".to_string()
}

/// One order, one message, for the admin's order review.
pub fn order_summary(order: &Order) -> String {
    format!(
        "Order #{}\nBuyer: {}\nAmount: {}\nStatus: {}",
        order.id, order.customer_id, order.total_price, order.status
    )
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use keyshop_engine::db_types::OrderStatusType;

    use super::*;

    #[test]
    fn payment_instructions_name_the_amount_and_address() {
        let text = payment_instructions(Sats::from(1_000_000), "bc1qexample");
        assert!(text.contains("0.01"));
        assert!(text.contains("bc1qexample"));
    }

    #[test]
    fn order_summary_names_the_buyer_and_status() {
        let order = Order {
            id: 7,
            customer_id: 42,
            key_id: 3,
            total_price: Sats::from(200_000),
            status: OrderStatusType::Pending,
            created_at: Utc::now(),
        };
        let text = order_summary(&order);
        assert!(text.contains("#7"));
        assert!(text.contains("42"));
        assert!(text.contains("0.002"));
        assert!(text.contains("Pending"));
    }
}
