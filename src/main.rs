use std::error::Error;

use teloxide::prelude::*;

use salon_bot::bot_state::BotState;
use salon_bot::config::BotConfig;
use salon_bot::handlers::{callback_handler, command_handler, message_handler, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting salon booking bot...");

    let config = BotConfig::from_env()?;
    log::info!(
        "✅ Config loaded: admin chat {}, timezone {}, hours {}-{}",
        config.admin_chat_id,
        config.timezone,
        config.open_hour,
        config.close_hour
    );

    let state = BotState::new(config);
    let bot = Bot::from_env();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
