use chrono::NaiveDateTime;
use teloxide::types::ChatId;

use super::Service;

/// Заявка на запись, ожидающая решения администратора.
///
/// Между `insert` и `remove` запись неизменяема; идентификаторы
/// выдаются реестром строго по возрастанию и не переиспользуются.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: u64,
    pub user_chat_id: ChatId,
    pub user_name: String,
    pub username: Option<String>,
    pub service: Service,
    pub slot: NaiveDateTime,
}

/// Та же заявка до присвоения идентификатора.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub user_chat_id: ChatId,
    pub user_name: String,
    pub username: Option<String>,
    pub service: Service,
    pub slot: NaiveDateTime,
}

impl Booking {
    pub fn from_draft(id: u64, draft: BookingDraft) -> Self {
        Self {
            id,
            user_chat_id: draft.user_chat_id,
            user_name: draft.user_name,
            username: draft.username,
            service: draft.service,
            slot: draft.slot,
        }
    }
}
