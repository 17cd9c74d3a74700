use chrono::{Duration, NaiveDate, NaiveTime};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::models::{Booking, CallbackAction, PageNav, ServiceCategory};

/// Экранирование MarkdownV2
pub fn escape_markdown_v2(text: &str) -> String {
    let specials = ['_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!'];
    let mut out = String::with_capacity(text.len() * 2);

    for ch in text.chars() {
        if specials.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Детали заявки, общий хвост всех уведомлений о ней.
pub fn booking_footer(booking: &Booking) -> String {
    let username = booking.username.as_deref().unwrap_or("—");
    format!(
        "*Booking ID:* `{}`\n\
        *Name:* {}\n\
        *Username:* @{}\n\
        *Service:* {}\n\
        *Timeslot:* {}",
        booking.id,
        escape_markdown_v2(&booking.user_name),
        escape_markdown_v2(username),
        escape_markdown_v2(booking.service.label()),
        escape_markdown_v2(&booking.slot.format("%Y-%m-%d %H:%M").to_string()),
    )
}

pub fn make_category_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(
            ServiceCategory::Women.button_label(),
            CallbackAction::Category(ServiceCategory::Women).payload(),
        ),
        InlineKeyboardButton::callback(
            ServiceCategory::Men.button_label(),
            CallbackAction::Category(ServiceCategory::Men).payload(),
        ),
    ]])
}

pub fn make_service_keyboard(category: ServiceCategory) -> InlineKeyboardMarkup {
    let row: Vec<InlineKeyboardButton> = category
        .services()
        .into_iter()
        .map(|service| {
            InlineKeyboardButton::callback(
                service.button_label(),
                CallbackAction::Service(service).payload(),
            )
        })
        .collect();
    InlineKeyboardMarkup::new(vec![row])
}

pub fn make_date_keyboard(today: NaiveDate, lookahead_days: u32) -> InlineKeyboardMarkup {
    let mut keyboard = Vec::new();
    for offset in 0..lookahead_days {
        let date = today + Duration::days(offset as i64);
        keyboard.push(vec![InlineKeyboardButton::callback(
            date.format("%Y-%m-%d").to_string(),
            CallbackAction::Date(date).payload(),
        )]);
    }
    InlineKeyboardMarkup::new(keyboard)
}

/// Страница слотов: по кнопке на строку, навигация только там, где
/// есть куда листать. Пустая страница не даёт ни одного кликабельного
/// слота и ни одной навигационной кнопки.
pub fn make_slot_keyboard(
    date: NaiveDate,
    slots: &[NaiveTime],
    has_prev: bool,
    has_next: bool,
) -> InlineKeyboardMarkup {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = Vec::new();

    for time in slots {
        let label = format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M"));
        keyboard.push(vec![InlineKeyboardButton::callback(
            label,
            CallbackAction::Slot(date.and_time(*time)).payload(),
        )]);
    }

    if slots.is_empty() {
        keyboard.push(vec![InlineKeyboardButton::callback(
            "❌ Нет доступных слотов на эту дату",
            "noop",
        )]);
    }

    let mut nav = Vec::new();
    if has_prev {
        nav.push(InlineKeyboardButton::callback(
            "← Back",
            CallbackAction::Page(PageNav::Prev).payload(),
        ));
    }
    if has_next {
        nav.push(InlineKeyboardButton::callback(
            "Next →",
            CallbackAction::Page(PageNav::Next).payload(),
        ));
    }
    if !nav.is_empty() {
        keyboard.push(nav);
    }

    InlineKeyboardMarkup::new(keyboard)
}

pub fn make_admin_decision_keyboard(booking_id: u64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("✅ Принять", CallbackAction::Accept(booking_id).payload()),
        InlineKeyboardButton::callback("❌ Отклонить", CallbackAction::Reject(booking_id).payload()),
    ]])
}

pub fn make_new_booking_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "📋 Новая запись",
        CallbackAction::NewBooking.payload(),
    )]])
}

#[cfg(test)]
mod tests {
    use teloxide::types::ChatId;

    use super::*;
    use crate::models::Service;

    #[test]
    fn escape_handles_markdown_specials() {
        assert_eq!(escape_markdown_v2("9:00 - 20:00!"), "9:00 \\- 20:00\\!");
        assert_eq!(escape_markdown_v2("Стрижка"), "Стрижка");
    }

    #[test]
    fn footer_renders_placeholder_without_username() {
        let booking = Booking {
            id: 5,
            user_chat_id: ChatId(100),
            user_name: "Иван".to_string(),
            username: None,
            service: Service::MenShave,
            slot: NaiveDate::from_ymd_opt(2026, 8, 7)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        };
        let footer = booking_footer(&booking);
        assert!(footer.contains("`5`"));
        assert!(footer.contains("@—"));
        assert!(footer.contains("14:30"));
    }

    #[test]
    fn empty_slot_page_has_no_nav_and_no_selectable_slots() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let keyboard = make_slot_keyboard(date, &[], false, false);
        let buttons: Vec<_> = keyboard.inline_keyboard.iter().flatten().collect();
        assert_eq!(buttons.len(), 1);
        assert!(buttons[0].text.contains("Нет доступных слотов"));
    }
}
