use teloxide::RequestError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("telegram request failed: {0}")]
    Telegram(#[from] RequestError),

    #[error("configuration error: {0}")]
    Config(String),
}
