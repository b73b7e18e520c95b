use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use yatrack_extract::{TrackExtractor, is_track_url};

use crate::messages;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Начать работу с ботом
    Start,
    /// Показать справку
    Help,
}

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    let text = match cmd {
        Command::Start => messages::WELCOME,
        Command::Help => messages::HELP,
    };
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Entry point for plain text messages. Anything that escapes the inner
/// handler is logged and answered with a generic retry-later notice, so one
/// bad update never takes the bot down.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    extractor: Arc<TrackExtractor>,
) -> HandlerResult {
    if let Err(err) = process_message(&bot, &msg, &extractor).await {
        log::error!("message {} in chat {} failed: {err}", msg.id.0, msg.chat.id);
        bot.send_message(msg.chat.id, messages::INTERNAL_ERROR).await?;
    }
    Ok(())
}

async fn process_message(bot: &Bot, msg: &Message, extractor: &TrackExtractor) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.trim();

    if !is_track_url(text) {
        bot.send_message(msg.chat.id, messages::INVALID_LINK).await?;
        return Ok(());
    }

    let progress = bot.send_message(msg.chat.id, messages::PROCESSING).await?;

    match extractor.fetch_track(text).await {
        Ok(track) => {
            bot.edit_message_text(msg.chat.id, progress.id, messages::track_report(&track))
                .await?;
            log::info!("processed track: {} by {}", track.title, track.artist);
        }
        Err(err) => {
            log::warn!("extraction failed for {text}: {err}");
            bot.edit_message_text(msg.chat.id, progress.id, messages::EXTRACTION_FAILED)
                .await?;
        }
    }

    Ok(())
}
