use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::{Booking, BookingDraft};

/// Общий реестр нерешённых заявок.
///
/// Счётчик идентификаторов и таблица заявок живут под одним замком:
/// `insert` выдаёт уникальный id при любом чередовании, а `remove`
/// срабатывает ровно один раз. Второй вызов `remove` по тому же id
/// видит `None`, этим и разрешается гонка принять/отклонить.
#[derive(Clone)]
pub struct BookingRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

struct RegistryInner {
    next_id: u64,
    bookings: BTreeMap<u64, Booking>,
}

impl BookingRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                next_id: 1,
                bookings: BTreeMap::new(),
            })),
        }
    }

    pub async fn insert(&self, draft: BookingDraft) -> u64 {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.bookings.insert(id, Booking::from_draft(id, draft));
        id
    }

    pub async fn get(&self, id: u64) -> Option<Booking> {
        self.inner.lock().await.bookings.get(&id).cloned()
    }

    pub async fn remove(&self, id: u64) -> Option<Booking> {
        self.inner.lock().await.bookings.remove(&id)
    }
}

impl Default for BookingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use teloxide::types::ChatId;

    use super::*;
    use crate::models::Service;

    fn draft() -> BookingDraft {
        BookingDraft {
            user_chat_id: ChatId(100),
            user_name: "Test User".to_string(),
            username: Some("testuser".to_string()),
            service: Service::WomenHaircut,
            slot: NaiveDate::from_ymd_opt(2026, 8, 7)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn concurrent_inserts_yield_distinct_sequential_ids() {
        let registry = BookingRegistry::new();
        let mut handles = Vec::new();
        for _ in 0..50 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move { registry.insert(draft()).await }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn remove_succeeds_exactly_once() {
        let registry = BookingRegistry::new();
        let id = registry.insert(draft()).await;

        assert!(registry.get(id).await.is_some());
        assert!(registry.remove(id).await.is_some());
        assert!(registry.remove(id).await.is_none());
        assert!(registry.get(id).await.is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_removal() {
        let registry = BookingRegistry::new();
        let first = registry.insert(draft()).await;
        registry.remove(first).await;
        let second = registry.insert(draft()).await;
        assert!(second > first);
    }
}
