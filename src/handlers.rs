use crate::api_client::StatsSource;
use crate::composer::{compose, render};
use crate::error::ComposeError;
use crate::regions;
use crate::sender::MessageSender;
use crate::utils::{ABOUT_TEXT, HELP_HEADER};
use teloxide::prelude::*;
use tracing::{error, info, warn};

pub async fn handle_stats(
    sender: &dyn MessageSender,
    chat_id: ChatId,
    code: &str,
    stats: &dyn StatsSource,
) -> ResponseResult<()> {
    let result = compose(stats, code).await;

    match &result {
        Ok(_) => info!("Sending stats for {} to chat {}", code, chat_id),
        Err(ComposeError::Fetch(e)) if e.is_network() => {
            error!("Stats feed unreachable for {}: {:?}", code, e)
        }
        Err(ComposeError::Fetch(e)) => error!("Stats feed returned bad data for {}: {:?}", code, e),
        Err(e) => warn!("Chat {} asked for {}: {}", chat_id, code, e),
    }

    let (info_text, emergency_text) = render(result);
    for text in [info_text, emergency_text] {
        // Telegram rejects empty messages.
        if !text.is_empty() {
            sender.send_text(chat_id, &text).await?;
        }
    }

    Ok(())
}

pub async fn handle_about(sender: &dyn MessageSender, chat_id: ChatId) -> ResponseResult<()> {
    sender.send_text(chat_id, ABOUT_TEXT).await
}

pub async fn handle_help(sender: &dyn MessageSender, chat_id: ChatId) -> ResponseResult<()> {
    sender.send_text(chat_id, HELP_HEADER).await?;
    sender.send_text(chat_id, &regions::listing()).await
}
