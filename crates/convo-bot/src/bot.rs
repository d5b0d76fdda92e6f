//! Core bot wiring using the Poise framework.

use crate::error::BotResult;
use crate::events;
use convo_commands::{framework_options, CooldownManager, Data};
use convo_config::Settings;
use convo_games::{PollClient, PromptStore};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// How often stale cooldown buckets are swept.
const COOLDOWN_PRUNE_INTERVAL: Duration = Duration::from_secs(600);

/// Main bot structure.
pub struct ConvoBot {
    settings: Arc<Settings>,
}

impl ConvoBot {
    /// Creates a new bot instance from validated settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Loads local data, builds the framework, and runs the gateway
    /// connection until it terminates.
    pub async fn start(&self) -> BotResult<()> {
        let prompts = Arc::new(PromptStore::load(&self.settings.data.dir)?);
        let polls = PollClient::new(Duration::from_secs(
            self.settings.upstream.request_timeout_secs,
        ))?;
        let cooldowns = Arc::new(CooldownManager::new());
        spawn_cooldown_prune_task(cooldowns.clone());

        let data = Data {
            settings: self.settings.clone(),
            prompts,
            polls,
            cooldowns,
        };

        let mut options = framework_options(&self.settings);
        options.event_handler =
            |ctx, event, framework, data| Box::pin(events::handle_event(ctx, event, framework, data));

        let framework = poise::Framework::builder()
            .options(options)
            .setup(move |_ctx, _ready, _framework| Box::pin(async move { Ok(data) }))
            .build();

        let intents = serenity::GatewayIntents::GUILDS
            | serenity::GatewayIntents::GUILD_MESSAGES
            | serenity::GatewayIntents::MESSAGE_CONTENT
            | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS;

        info!("connecting to the Discord gateway");
        let mut client = serenity::ClientBuilder::new(&self.settings.bot.token, intents)
            .framework(framework)
            .await?;

        client.start().await?;
        Ok(())
    }
}

/// Background sweep so cooldown buckets do not accumulate without bound.
fn spawn_cooldown_prune_task(cooldowns: Arc<CooldownManager>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(COOLDOWN_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            cooldowns.prune_expired(Instant::now());
        }
    });
}
