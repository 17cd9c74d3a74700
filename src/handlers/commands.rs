use std::error::Error;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot_state::BotState;
use crate::errors::BotError;
use crate::handlers::callbacks::start_booking;
use crate::handlers::messages::finish_rejection;
use crate::handlers::utils::escape_markdown_v2;
use crate::messaging::{Messenger, TelegramMessenger};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать запись")]
    Start,
    #[command(description = "показать помощь")]
    Help,
    #[command(description = "отклонить заявку без комментария")]
    Skip,
    #[command(description = "показать ID текущего чата")]
    GetId,
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let messenger = TelegramMessenger::new(bot);
    match cmd {
        Command::Start => start_booking(&messenger, &state, msg.chat.id).await?,
        Command::Help => handle_help(&messenger, msg.chat.id).await?,
        Command::Skip => finish_rejection(&messenger, &state, msg.chat.id, None).await?,
        Command::GetId => handle_getid(&messenger, msg.chat.id).await?,
    }
    Ok(())
}

async fn handle_help<M: Messenger>(messenger: &M, chat_id: ChatId) -> Result<(), BotError> {
    messenger
        .send_message(
            chat_id,
            "💈 *Помощь по боту*\n\n\
            /start \\- начать запись\n\
            /skip \\- отклонить заявку без комментария \\(для администратора\\)\n\
            /getid \\- показать ID чата\n\n\
            Выберите категорию, услугу, дату и время, заявка уйдёт администратору на подтверждение\\.",
            None,
        )
        .await
}

/// Утилита для настройки ADMIN_CHAT_ID: бот отвечает ID чата.
async fn handle_getid<M: Messenger>(messenger: &M, chat_id: ChatId) -> Result<(), BotError> {
    messenger
        .send_message(
            chat_id,
            &format!("Chat ID is: {}", escape_markdown_v2(&chat_id.to_string())),
            None,
        )
        .await
}
