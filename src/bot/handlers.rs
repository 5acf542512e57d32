use super::{
    Command,
    messages::{HELP_MESSAGE, PROCESSING_FAILED, WELCOME_MESSAGE, split_message},
};
use crate::grammar::TextProcessor;
use std::sync::Arc;
use teloxide::{
    payloads::{SendMessage, SendMessageSetters},
    prelude::*,
    requests::JsonRequest,
    types::{ChatAction, ParseMode, ReplyParameters},
};
use tracing::{debug, error, info, warn};

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    let text = match cmd {
        Command::Start => {
            if let Some(user) = msg.from.as_ref() {
                info!(
                    "User {} ({}) started the bot",
                    user.id,
                    user.username.as_deref().unwrap_or("-")
                );
            }
            WELCOME_MESSAGE
        }
        Command::Help => HELP_MESSAGE,
    };

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Markdown)
        .await?;

    Ok(())
}

pub async fn handle_text(
    bot: Bot,
    msg: Message,
    processor: Arc<TextProcessor>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (user_id, username) = msg
        .from
        .as_ref()
        .map(|u| (u.id.0, u.username.clone().unwrap_or_else(|| "-".to_string())))
        .unwrap_or((0, "-".to_string()));

    info!("User {} ({}) sent: {}", user_id, username, text);

    if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
        warn!("Failed to send typing indicator to chat {}: {}", msg.chat.id, e);
    }

    let reply = processor.process(text).await;

    match deliver(&bot, &msg, &reply).await {
        Ok(()) => {
            info!("Sent response to user {}", user_id);
            Ok(())
        }
        Err(e) => {
            error!("Error processing message from user {}: {}", user_id, e);
            bot.send_message(msg.chat.id, PROCESSING_FAILED)
                .parse_mode(ParseMode::Markdown)
                .await?;
            Ok(())
        }
    }
}

/// Sends `reply` in Telegram-sized chunks, the first one quoting `msg`,
/// falling back to plain text for any chunk Telegram refuses to parse as
/// Markdown.
pub async fn deliver(bot: &Bot, msg: &Message, reply: &str) -> ResponseResult<()> {
    let parts = split_message(reply);
    let total = parts.len();

    for (sent, part) in parts.into_iter().enumerate() {
        let quote = sent == 0;
        let markdown = chunk_request(bot, msg, &part, quote)
            .parse_mode(ParseMode::Markdown)
            .await;

        if let Err(e) = markdown {
            warn!(
                "Markdown reply rejected for chat {}, resending as plain text: {}",
                msg.chat.id, e
            );
            if let Err(e) = chunk_request(bot, msg, &part, quote).await {
                warn!(
                    "Delivered {} of {} reply chunks to chat {}",
                    sent, total, msg.chat.id
                );
                return Err(e);
            }
        }
    }

    debug!("Delivered {} reply chunks to chat {}", total, msg.chat.id);
    Ok(())
}

fn chunk_request(bot: &Bot, msg: &Message, text: &str, quote: bool) -> JsonRequest<SendMessage> {
    let request = bot.send_message(msg.chat.id, text);
    if quote {
        request.reply_parameters(ReplyParameters::new(msg.id))
    } else {
        request
    }
}
