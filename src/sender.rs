use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::RequestError;

/// Outbound side of the chat transport.
///
/// Handlers only need to post plain text, so tests can substitute a
/// recorder for the real bot.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RequestError>;
}

#[async_trait]
impl MessageSender for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RequestError> {
        self.send_message(chat_id, text.to_string()).await?;
        Ok(())
    }
}
