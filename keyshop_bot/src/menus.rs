//! Inline keyboards the bot shows: the buyable-catalogue menu and the two-action admin panel. Like
//! [`crate::formatting`], these are pure constructors with no side effects.
use keyshop_engine::db_types::GameKey;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Callback payload prefix for a buy button; the key's store id follows the colon.
pub const BUY_PREFIX: &str = "buy:";
/// Callback payload for the admin "add key" action.
pub const ADD_KEY: &str = "add_key";
/// Callback payload for the admin "view orders" action.
pub const VIEW_ORDERS: &str = "view_orders";

/// One button per key, labeled with the game name. Pressing it starts the purchase of that specific key.
pub fn catalog_menu(keys: &[GameKey]) -> InlineKeyboardMarkup {
    let buttons = keys
        .iter()
        .map(|key| vec![InlineKeyboardButton::callback(key.game.clone(), format!("{BUY_PREFIX}{}", key.id))])
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(buttons)
}

pub fn admin_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Add key", ADD_KEY)],
        vec![InlineKeyboardButton::callback("View orders", VIEW_ORDERS)],
    ])
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use ks_common::Sats;
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    fn key(id: i64, game: &str) -> GameKey {
        GameKey {
            id,
            game: game.to_string(),
            code: "XXXX-0000".to_string(),
            price: Sats::from(1_000_000),
            sold: false,
            created_at: Utc::now(),
        }
    }

    fn payload(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data.as_str(),
            k => panic!("Expected a callback button, got {k:?}"),
        }
    }

    #[test]
    fn catalog_menu_has_one_button_per_key() {
        let keys = [key(1, "Diablo IV"), key(5, "Cyberpunk")];
        let menu = catalog_menu(&keys);
        assert_eq!(menu.inline_keyboard.len(), 2);
        assert_eq!(menu.inline_keyboard[0][0].text, "Diablo IV");
        assert_eq!(payload(&menu.inline_keyboard[0][0]), "buy:1");
        assert_eq!(payload(&menu.inline_keyboard[1][0]), "buy:5");
    }

    #[test]
    fn admin_menu_offers_exactly_two_actions() {
        let menu = admin_menu();
        let payloads = menu.inline_keyboard.iter().flatten().map(payload).collect::<Vec<_>>();
        assert_eq!(payloads, vec![ADD_KEY, VIEW_ORDERS]);
    }
}
