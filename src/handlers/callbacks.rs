use std::error::Error;

use chrono::{NaiveDate, NaiveDateTime};
use teloxide::prelude::*;
use teloxide::types::MessageId;

use crate::bot_state::BotState;
use crate::errors::BotError;
use crate::handlers::utils::{
    booking_footer, make_admin_decision_keyboard, make_category_keyboard, make_date_keyboard,
    make_new_booking_keyboard, make_service_keyboard, make_slot_keyboard,
};
use crate::messaging::{Messenger, TelegramMessenger};
use crate::models::{
    Booking, BookingDialog, BookingDraft, CallbackAction, PageNav, Service, ServiceCategory,
};
use crate::slots::{generate_slots, page_slots};

const NOT_FOUND_TEXT: &str = "⚠️ Запрос не найден или закрыт\\.";

/// Контекст callback-запроса, извлечённый из Telegram-обновления.
#[derive(Debug, Clone)]
pub struct CallbackCtx {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub user_name: String,
    pub username: Option<String>,
}

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(data) = q.data.as_deref() {
        if let Some(ref message) = q.message {
            let ctx = CallbackCtx {
                chat_id: message.chat().id,
                message_id: message.id(),
                user_name: q.from.full_name(),
                username: q.from.username.clone(),
            };

            match CallbackAction::parse(data) {
                Some(action) => {
                    let messenger = TelegramMessenger::new(bot);
                    handle_action(&messenger, &state, &ctx, action).await?;
                }
                None => {
                    // Устаревшая или чужая кнопка: молча пропускаем.
                    log::debug!("Ignoring malformed callback payload: {}", data);
                }
            }
        }
    }

    Ok(())
}

pub async fn handle_action<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    action: CallbackAction,
) -> Result<(), BotError> {
    match action {
        CallbackAction::NewBooking => start_booking(messenger, state, ctx.chat_id).await,
        CallbackAction::Category(category) => choose_category(messenger, state, ctx, category).await,
        CallbackAction::Service(service) => choose_service(messenger, state, ctx, service).await,
        CallbackAction::Date(date) => choose_date(messenger, state, ctx, date).await,
        CallbackAction::Page(nav) => turn_slot_page(messenger, state, ctx, nav).await,
        CallbackAction::Slot(slot) => choose_slot(messenger, state, ctx, slot).await,
        CallbackAction::Accept(id) => accept_booking(messenger, state, ctx, id).await,
        CallbackAction::Reject(id) => request_reject_reason(messenger, state, ctx, id).await,
    }
}

/// Начало (или перезапуск) диалога записи. Приглашение всегда уходит
/// новым сообщением: кнопка "новая запись" приходит после решения по
/// прошлой заявке, и редактировать там нечего.
pub async fn start_booking<M: Messenger>(
    messenger: &M,
    state: &BotState,
    chat_id: ChatId,
) -> Result<(), BotError> {
    state.set_dialog(chat_id, BookingDialog::SelectCategory).await;
    messenger
        .send_message(
            chat_id,
            "Добро Пожаловать в Solo Beauty\\!\nПожалуйста выберите категорию:",
            Some(make_category_keyboard()),
        )
        .await
}

async fn choose_category<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    category: ServiceCategory,
) -> Result<(), BotError> {
    match state.get_dialog(ctx.chat_id).await {
        Some(BookingDialog::SelectCategory) => {}
        other => {
            log::debug!("Ignoring category pick in state {:?}", other);
            return Ok(());
        }
    }

    state
        .set_dialog(ctx.chat_id, BookingDialog::SelectService { category })
        .await;
    messenger
        .edit_message(
            ctx.chat_id,
            ctx.message_id,
            "Пожалуйста Выберите Услугу:",
            Some(make_service_keyboard(category)),
        )
        .await
}

async fn choose_service<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    service: Service,
) -> Result<(), BotError> {
    match state.get_dialog(ctx.chat_id).await {
        Some(BookingDialog::SelectService { category }) if service.category() == category => {}
        other => {
            log::debug!("Ignoring service pick in state {:?}", other);
            return Ok(());
        }
    }

    state
        .set_dialog(ctx.chat_id, BookingDialog::SelectDate { service })
        .await;

    let today = state.config.now().date_naive();
    messenger
        .edit_message(
            ctx.chat_id,
            ctx.message_id,
            "Пожалуйста выберите дату:",
            Some(make_date_keyboard(today, state.config.lookahead_days)),
        )
        .await
}

async fn choose_date<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    date: NaiveDate,
) -> Result<(), BotError> {
    let service = match state.get_dialog(ctx.chat_id).await {
        Some(BookingDialog::SelectDate { service }) => service,
        other => {
            log::debug!("Ignoring date pick in state {:?}", other);
            return Ok(());
        }
    };

    state
        .set_dialog(ctx.chat_id, BookingDialog::SelectSlot { service, date, page: 0 })
        .await;
    render_slot_page(messenger, state, ctx, date, 0).await
}

async fn turn_slot_page<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    nav: PageNav,
) -> Result<(), BotError> {
    let (service, date, page) = match state.get_dialog(ctx.chat_id).await {
        Some(BookingDialog::SelectSlot { service, date, page }) => (service, date, page),
        other => {
            log::debug!("Ignoring pagination in state {:?}", other);
            return Ok(());
        }
    };

    let config = &state.config;
    let slots = generate_slots(date, config.now(), config.open_hour, config.close_hour);
    let new_page = match nav {
        PageNav::Prev if page > 0 => page - 1,
        PageNav::Next if (page + 1) * config.page_size < slots.len() => page + 1,
        _ => {
            log::debug!("Ignoring out-of-range page flip from page {}", page);
            return Ok(());
        }
    };

    state
        .set_dialog(
            ctx.chat_id,
            BookingDialog::SelectSlot { service, date, page: new_page },
        )
        .await;
    render_slot_page(messenger, state, ctx, date, new_page).await
}

async fn render_slot_page<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    date: NaiveDate,
    page: usize,
) -> Result<(), BotError> {
    let config = &state.config;
    let slots = generate_slots(date, config.now(), config.open_hour, config.close_hour);
    let (chunk, has_prev, has_next) = page_slots(&slots, page, config.page_size);

    messenger
        .edit_message(
            ctx.chat_id,
            ctx.message_id,
            "Select a timeslot:",
            Some(make_slot_keyboard(date, chunk, has_prev, has_next)),
        )
        .await
}

/// Терминальный переход пользовательского диалога: заявка попадает в
/// реестр и уходит администратору, диалог очищается.
async fn choose_slot<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    slot: NaiveDateTime,
) -> Result<(), BotError> {
    let service = match state.get_dialog(ctx.chat_id).await {
        Some(BookingDialog::SelectSlot { service, .. }) => service,
        other => {
            log::debug!("Ignoring slot pick in state {:?}", other);
            return Ok(());
        }
    };

    let draft = BookingDraft {
        user_chat_id: ctx.chat_id,
        user_name: ctx.user_name.clone(),
        username: ctx.username.clone(),
        service,
        slot,
    };
    let id = state.registry.insert(draft.clone()).await;
    log::info!("📋 Booking {} created for chat {}", id, ctx.chat_id);

    // Рассылка только после того, как реестр отпустил замок.
    let booking = Booking::from_draft(id, draft);
    messenger
        .send_message(
            state.config.admin_chat_id,
            &format!("🆕 *New Booking Request*\n{}", booking_footer(&booking)),
            Some(make_admin_decision_keyboard(id)),
        )
        .await?;

    messenger
        .edit_message(
            ctx.chat_id,
            ctx.message_id,
            "👌 Ваш запрос рассматривается, вам скоро ответят :\\)",
            None,
        )
        .await?;

    state.clear_dialog(ctx.chat_id).await;
    Ok(())
}

/// Принятие: `remove` в реестре и есть само решение. Проигравший
/// гонку видит `None` и не шлёт пользователю второго уведомления.
async fn accept_booking<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    booking_id: u64,
) -> Result<(), BotError> {
    let booking = match state.registry.remove(booking_id).await {
        Some(booking) => booking,
        None => {
            log::warn!("Accept for missing booking {}", booking_id);
            return messenger
                .edit_message(ctx.chat_id, ctx.message_id, NOT_FOUND_TEXT, None)
                .await;
        }
    };

    let footer = booking_footer(&booking);
    messenger
        .send_message(
            booking.user_chat_id,
            &format!("✅ Ваш запрос *принят*\\!\n\n{}", footer),
            Some(make_new_booking_keyboard()),
        )
        .await?;
    messenger
        .edit_message(
            ctx.chat_id,
            ctx.message_id,
            &format!("✅ *Запрос Принят\\!*\n\n{}", footer),
            None,
        )
        .await?;

    log::info!("✅ Booking {} accepted", booking_id);
    Ok(())
}

/// Отклонение начинается с запроса причины; сама заявка остаётся в
/// реестре до её получения (или /skip).
async fn request_reject_reason<M: Messenger>(
    messenger: &M,
    state: &BotState,
    ctx: &CallbackCtx,
    booking_id: u64,
) -> Result<(), BotError> {
    let booking = match state.registry.get(booking_id).await {
        Some(booking) => booking,
        None => {
            log::warn!("Reject for missing booking {}", booking_id);
            return messenger
                .edit_message(ctx.chat_id, ctx.message_id, NOT_FOUND_TEXT, None)
                .await;
        }
    };

    state.set_pending_reject(ctx.chat_id, booking_id).await;
    messenger
        .edit_message(
            ctx.chat_id,
            ctx.message_id,
            &format!(
                "❌ *Booking pending rejection*\n\n{}\n\n\
                Пожалуйста напишите *причину отклонения* \\(или отправьте /skip для отклонения без комментариев\\):",
                booking_footer(&booking)
            ),
            None,
        )
        .await
}
