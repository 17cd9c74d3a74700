use std::error::Error;

use teloxide::prelude::*;

use crate::bot_state::BotState;
use crate::errors::BotError;
use crate::handlers::utils::{booking_footer, escape_markdown_v2, make_new_booking_keyboard};
use crate::messaging::{Messenger, TelegramMessenger};

const NO_LONGER_AVAILABLE_TEXT: &str = "⚠️ Этот запрос больше не доступен\\.";

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(text) = msg.text() {
        // Команды уже разобраны в command_handler
        if text.starts_with('/') {
            return Ok(());
        }

        let messenger = TelegramMessenger::new(bot);
        handle_text(&messenger, &state, msg.chat.id, text).await?;
    }

    Ok(())
}

/// Свободный текст имеет смысл только как причина отклонения.
pub async fn handle_text<M: Messenger>(
    messenger: &M,
    state: &BotState,
    chat_id: ChatId,
    text: &str,
) -> Result<(), BotError> {
    if chat_id == state.config.admin_chat_id {
        return finish_rejection(messenger, state, chat_id, Some(text)).await;
    }

    log::debug!("Ignoring free text from chat {}", chat_id);
    Ok(())
}

/// Завершение отклонения: причина (или её пропуск через /skip)
/// снимает заявку с реестра и уведомляет пользователя.
pub async fn finish_rejection<M: Messenger>(
    messenger: &M,
    state: &BotState,
    chat_id: ChatId,
    reason: Option<&str>,
) -> Result<(), BotError> {
    let booking_id = match state.take_pending_reject(chat_id).await {
        Some(id) => id,
        None => {
            // Процесс мог перезапуститься между кнопкой и причиной.
            if chat_id == state.config.admin_chat_id {
                messenger
                    .send_message(chat_id, NO_LONGER_AVAILABLE_TEXT, None)
                    .await?;
            }
            return Ok(());
        }
    };

    let booking = match state.registry.remove(booking_id).await {
        Some(booking) => booking,
        None => {
            log::warn!("Reject reason for missing booking {}", booking_id);
            return messenger
                .send_message(chat_id, NO_LONGER_AVAILABLE_TEXT, None)
                .await;
        }
    };

    let reason_suffix = match reason {
        Some(text) => format!("\n\n_Reason:_ {}", escape_markdown_v2(text)),
        None => String::new(),
    };
    let footer = booking_footer(&booking);

    messenger
        .send_message(
            booking.user_chat_id,
            &format!("❌ Ваш запрос был *отклонён*\\.{}\n\n{}", reason_suffix, footer),
            Some(make_new_booking_keyboard()),
        )
        .await?;
    messenger
        .send_message(
            chat_id,
            &format!("❌ *Запрос Отклонён\\.*{}\n\n{}", reason_suffix, footer),
            None,
        )
        .await?;

    log::info!("❌ Booking {} rejected", booking_id);
    Ok(())
}
