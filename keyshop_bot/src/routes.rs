//! Update handlers.
//!
//! Keep each handler transport-thin: resolve the caller, ask the engine, build the reply with
//! [`crate::formatting`] and [`crate::menus`], send it. Domain failures (`KeyUnavailable`, a malformed listing)
//! are converted to user-facing replies here; store faults propagate out as [`BotError`] and are logged by the
//! dispatcher, ending only the current update's processing.
use keyshop_engine::{db_types::NewUser, CatalogError, OrderFlowError};
use log::*;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::{auth::is_admin, errors::BotError, formatting, menus, AppState};

pub type HandlerResult = Result<(), BotError>;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Game key shop commands:")]
pub enum Command {
    #[command(description = "register with the shop and show the welcome message.")]
    Start,
    #[command(description = "browse the keys that are in stock.")]
    Shop,
    #[command(description = "open the admin panel.")]
    Admin,
}

/// `/start`. Registration never fails from the caller's point of view, and re-running it is a no-op.
pub async fn start(bot: Bot, msg: Message, state: AppState) -> HandlerResult {
    if let Some(user) = msg.from.as_ref() {
        let mut new_user = NewUser::new(user.id.0 as i64).with_first_name(user.first_name.clone());
        new_user.username = user.username.clone();
        state.users.register_user(new_user).await?;
    }
    bot.send_message(msg.chat.id, formatting::welcome_text()).await?;
    Ok(())
}

/// `/shop`. Lists the catalogue as an inline menu; an empty catalogue gets a plain "no stock" reply instead.
pub async fn shop(bot: Bot, msg: Message, state: AppState) -> HandlerResult {
    let keys = state.catalog.available_keys().await?;
    if keys.is_empty() {
        bot.send_message(msg.chat.id, formatting::no_stock_text()).await?;
    } else {
        bot.send_message(msg.chat.id, formatting::catalog_prompt())
            .reply_markup(menus::catalog_menu(&keys))
            .await?;
    }
    Ok(())
}

/// `/admin`. The panel offers exactly two actions; anyone who is not the configured admin is politely refused.
pub async fn admin_panel(bot: Bot, msg: Message, state: AppState) -> HandlerResult {
    if !is_admin(state.admin_id, msg.from.as_ref()) {
        bot.send_message(msg.chat.id, formatting::admin_refusal_text()).await?;
        return Ok(());
    }
    bot.send_message(msg.chat.id, formatting::admin_panel_text()).reply_markup(menus::admin_menu()).await?;
    Ok(())
}

/// Free text from the admin is a key listing. The router only dispatches here for the admin, so there is no
/// refusal path; everyone else's free text never reaches this handler.
pub async fn add_key_listing(bot: Bot, msg: Message, state: AppState) -> HandlerResult {
    let listing = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };
    match state.catalog.add_key(listing).await {
        Ok(key) => {
            bot.send_message(msg.chat.id, formatting::key_added_text(&key)).await?;
        },
        Err(CatalogError::InvalidKeySpec(e)) => {
            debug!("🗝️ Rejected key listing: {e}");
            bot.send_message(msg.chat.id, formatting::invalid_listing_text()).await?;
        },
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Inline button presses. The payload picks the action: `buy:<id>` starts a purchase, the other two are the
/// admin panel's actions.
pub async fn handle_callback(bot: Bot, q: CallbackQuery, state: AppState) -> HandlerResult {
    let data = match q.data.clone() {
        Some(data) => data,
        None => return Ok(()),
    };
    if let Some(key_id) = data.strip_prefix(menus::BUY_PREFIX) {
        return handle_buy(bot, q, state, key_id).await;
    }
    match data.as_str() {
        menus::ADD_KEY => handle_add_key_prompt(bot, q, state).await,
        menus::VIEW_ORDERS => handle_view_orders(bot, q, state).await,
        other => {
            warn!("🤖️ Ignoring unknown callback payload: {other}");
            bot.answer_callback_query(q.id.clone()).await?;
            Ok(())
        },
    }
}

/// A buyer pressed a catalogue button. On success the menu message is replaced with payment instructions; a
/// key that is gone (or a payload that does not parse) gets the "unavailable" reply instead.
async fn handle_buy(bot: Bot, q: CallbackQuery, state: AppState, key_id: &str) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;
    let message = match q.message {
        Some(message) => message,
        None => return Ok(()),
    };
    let key_id = key_id.parse::<i64>().unwrap_or(-1);
    let buyer = q.from.id.0 as i64;
    match state.orders.reserve_key(key_id, buyer).await {
        Ok(order) => {
            let instructions = formatting::payment_instructions(order.total_price, &state.payment_address);
            bot.edit_message_text(message.chat().id, message.id(), instructions).await?;
        },
        Err(OrderFlowError::KeyUnavailable) => {
            bot.edit_message_text(message.chat().id, message.id(), formatting::key_unavailable_text()).await?;
        },
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Admin panel: "Add key". Prompts for the pipe-delimited listing. A non-admin pressing a stale button gets
/// the refusal reply, same as the `/admin` command.
async fn handle_add_key_prompt(bot: Bot, q: CallbackQuery, state: AppState) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;
    let message = match q.message {
        Some(message) => message,
        None => return Ok(()),
    };
    if !is_admin(state.admin_id, Some(&q.from)) {
        bot.send_message(message.chat().id, formatting::admin_refusal_text()).await?;
        return Ok(());
    }
    bot.send_message(message.chat().id, formatting::add_key_prompt()).await?;
    Ok(())
}

/// Admin panel: "View orders". One message per order. Non-admin presses are dropped without a reply.
async fn handle_view_orders(bot: Bot, q: CallbackQuery, state: AppState) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;
    if !is_admin(state.admin_id, Some(&q.from)) {
        return Ok(());
    }
    let message = match q.message {
        Some(message) => message,
        None => return Ok(()),
    };
    let orders = state.orders.fetch_orders().await?;
    if orders.is_empty() {
        bot.send_message(message.chat().id, formatting::no_orders_text()).await?;
        return Ok(());
    }
    for order in &orders {
        bot.send_message(message.chat().id, formatting::order_summary(order)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn command_names_are_the_contract() {
        assert_eq!(Command::parse("/start", "keyshop_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/shop", "keyshop_bot").unwrap(), Command::Shop);
        assert_eq!(Command::parse("/admin", "keyshop_bot").unwrap(), Command::Admin);
        assert!(Command::parse("/refund", "keyshop_bot").is_err());
    }
}
