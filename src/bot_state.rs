use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::RwLock;

use crate::config::BotConfig;
use crate::models::BookingDialog;
use crate::registry::BookingRegistry;

type DialogMap = Arc<RwLock<HashMap<ChatId, BookingDialog>>>;
type PendingRejectMap = Arc<RwLock<HashMap<ChatId, u64>>>;

/// Общее состояние бота: конфигурация, реестр заявок, диалоги
/// пользователей и ожидающие причины отклонения.
///
/// Диалог принадлежит одному чату и никогда не читается чужим
/// потоком обработки; синхронизация нужна только самим картам.
#[derive(Clone)]
pub struct BotState {
    pub config: Arc<BotConfig>,
    pub registry: BookingRegistry,
    dialogs: DialogMap,
    pending_rejects: PendingRejectMap,
}

impl BotState {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config: Arc::new(config),
            registry: BookingRegistry::new(),
            dialogs: Arc::new(RwLock::new(HashMap::new())),
            pending_rejects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get_dialog(&self, chat_id: ChatId) -> Option<BookingDialog> {
        self.dialogs.read().await.get(&chat_id).cloned()
    }

    pub async fn set_dialog(&self, chat_id: ChatId, dialog: BookingDialog) {
        self.dialogs.write().await.insert(chat_id, dialog);
    }

    pub async fn clear_dialog(&self, chat_id: ChatId) {
        self.dialogs.write().await.remove(&chat_id);
    }

    pub async fn set_pending_reject(&self, chat_id: ChatId, booking_id: u64) {
        self.pending_rejects.write().await.insert(chat_id, booking_id);
    }

    /// Забирает id заявки, ожидающей причину отклонения в этом чате.
    pub async fn take_pending_reject(&self, chat_id: ChatId) -> Option<u64> {
        self.pending_rejects.write().await.remove(&chat_id)
    }
}
