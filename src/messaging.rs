use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};

use crate::errors::BotError;

/// Узкий интерфейс исходящих сообщений.
///
/// Машины состояний ходят в Telegram только через него, поэтому в
/// тестах их можно прогонять на записывающей заглушке.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError>;

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError>;
}

/// Боевая реализация поверх `teloxide::Bot`, всегда MarkdownV2.
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError> {
        let mut request = self
            .bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::MarkdownV2);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await?;
        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError> {
        let mut request = self
            .bot
            .edit_message_text(chat_id, message_id, text)
            .parse_mode(ParseMode::MarkdownV2);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await?;
        Ok(())
    }
}
