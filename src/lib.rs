//! Telegram-бот записи в салон: пользовательский диалог выбора услуги
//! и слота, заявки в общем реестре, подтверждение администратором.

pub mod bot_state;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod messaging;
pub mod models;
pub mod registry;
pub mod slots;
