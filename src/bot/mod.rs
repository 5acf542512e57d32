//! Telegram front end: command surface, typing indicator and reply delivery.

pub mod handlers;
pub mod messages;

use crate::{Error, Result, config::TelegramConfig, grammar::TextProcessor};
use std::sync::Arc;
use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    error_handlers::LoggingErrorHandler,
    prelude::*,
    utils::command::BotCommands,
};
use tracing::{debug, info};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Запустить бота")]
    Start,
    #[command(description = "Показать справку")]
    Help,
}

/// Update routing: known commands first, then any non-command text.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.text().is_some_and(|t| !t.starts_with('/')))
                .endpoint(handlers::handle_text),
        )
}

pub fn build_bot(config: &TelegramConfig) -> Result<Bot> {
    let bot = Bot::new(&config.bot_token);

    match config.api_url.as_deref() {
        Some(url) => {
            let url = url
                .parse()
                .map_err(|e| Error::config(format!("Invalid Telegram API URL '{}': {}", url, e)))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Polls Telegram until interrupted, answering each text message with
/// [`TextProcessor::process`].
pub async fn run(config: &TelegramConfig, processor: Arc<TextProcessor>) -> Result<()> {
    let bot = build_bot(config)?;

    let me = bot.get_me().await?;
    info!(
        "Connected to Telegram as @{}",
        me.username.as_deref().unwrap_or("unknown")
    );

    bot.set_my_commands(Command::bot_commands()).await?;

    info!("Starting Portuguese Helper Bot...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![processor])
        .default_handler(|update| async move {
            debug!("Ignoring unhandled update {:?}", update.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Exception while handling an update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");
    Ok(())
}
