//! Dispatcher wiring.
//!
//! [`schema`] builds the complete handler tree and is kept separate from [`run_bot`] so that tests (and any
//! future transport) can work with exactly the tree the binary runs.
use keyshop_engine::sqlite::{db, SqliteDatabase};
use log::*;
use teloxide::{dispatching::UpdateHandler, dptree, error_handlers::LoggingErrorHandler, prelude::*};

use crate::{auth::is_admin, config::BotConfig, errors::BotError, routes, AppState};

/// The full routing table: the three commands, the admin's free-text key listings, and the callback surface.
/// Dispatch order matters: command messages must be picked off before the free-text branch sees them.
pub fn schema() -> UpdateHandler<BotError> {
    use teloxide::dptree::case;

    let commands = teloxide::filter_command::<routes::Command, _>()
        .branch(case![routes::Command::Start].endpoint(routes::start))
        .branch(case![routes::Command::Shop].endpoint(routes::shop))
        .branch(case![routes::Command::Admin].endpoint(routes::admin_panel));

    let messages = Update::filter_message()
        .branch(commands)
        // Bare text from the admin is a key listing. Everyone else's free text falls off the tree here and is
        // dropped silently.
        .branch(
            dptree::filter(|msg: Message, state: AppState| {
                msg.text().is_some() && is_admin(state.admin_id, msg.from.as_ref())
            })
            .endpoint(routes::add_key_listing),
        );

    dptree::entry().branch(messages).branch(Update::filter_callback_query().endpoint(routes::handle_callback))
}

/// Connects to the store, brings the schema up to date, and long-polls Telegram until shutdown.
pub async fn run_bot(config: BotConfig) -> Result<(), BotError> {
    config.assert_ready()?;
    db::create_database_if_missing(&config.database_url)
        .await
        .map_err(|e| BotError::InitializeError(format!("Could not create the database. {e}")))?;
    let db = SqliteDatabase::new_with_url(&config.database_url, 5).await?;
    db::run_migrations(db.pool())
        .await
        .map_err(|e| BotError::InitializeError(format!("Could not run the migrations. {e}")))?;

    let bot = Bot::new(config.token.reveal().as_str());
    let state = AppState::new(db, &config);

    info!("🤖️ Key shop bot is up. Long-polling for updates.");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            trace!("🤖️ Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("🤖️ An error occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    Ok(())
}
