//! Main entry point for the Conversational Games Bot.

use convo_bot::{BotResult, ConvoBot};
use convo_config::Settings;
use std::env;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    convo_common::logging::init_logging("convo_bot=info,convo_commands=info,convo_games=info");

    info!("Starting Conversational Games Bot");

    let settings = load_settings()?;
    let bot = ConvoBot::new(settings);

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {e}");
        return Err(e);
    }

    Ok(())
}

/// Loads settings from the config file (path overridable via
/// `CONVO_CONFIG`), applies the `DISCORD_TOKEN` override, and validates.
fn load_settings() -> BotResult<Settings> {
    let path = env::var("CONVO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let mut settings = convo_config::load(&path)?;

    if let Ok(token) = env::var("DISCORD_TOKEN") {
        settings.bot.token = token;
    }

    settings.validate()?;
    Ok(settings)
}
