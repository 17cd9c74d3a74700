use std::env;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use teloxide::types::ChatId;

use crate::errors::BotError;

/// Настройки бота, читаются один раз при старте.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Чат администратора (группа салона), куда уходят заявки.
    pub admin_chat_id: ChatId,
    /// Все вычисления "сегодня" и фильтрация слотов идут в этой зоне.
    pub timezone: Tz,
    pub open_hour: u32,
    pub close_hour: u32,
    pub page_size: usize,
    pub lookahead_days: u32,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, BotError> {
        let admin_chat_id = env::var("ADMIN_CHAT_ID")
            .map_err(|_| BotError::Config("ADMIN_CHAT_ID must be set (e.g. -4717273516)".to_string()))?
            .parse::<i64>()
            .map(ChatId)
            .map_err(|e| BotError::Config(format!("ADMIN_CHAT_ID: {}", e)))?;

        let timezone = env::var("BOT_TIMEZONE")
            .unwrap_or_else(|_| "Europe/Moscow".to_string())
            .parse::<Tz>()
            .map_err(|e| BotError::Config(format!("BOT_TIMEZONE: {}", e)))?;

        Ok(Self {
            admin_chat_id,
            timezone,
            open_hour: env_or("OPEN_HOUR", 9),
            close_hour: env_or("CLOSE_HOUR", 24),
            page_size: env_or("PAGE_SIZE", 9),
            lookahead_days: env_or("LOOKAHEAD_DAYS", 3),
        })
    }

    /// Текущее время в настроенной зоне, не в зоне процесса.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
