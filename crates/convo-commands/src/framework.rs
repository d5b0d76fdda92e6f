//! Poise framework assembly: shared data, cooldown middleware, and the
//! error boundary that keeps handler failures away from the dispatch loop.

use crate::cooldown::{policy_for, CooldownError, CooldownManager, CooldownScope};
use convo_config::Settings;
use convo_games::{PollClient, PromptStore};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// How long a cooldown rejection notice stays before being removed.
const COOLDOWN_NOTICE_TTL: Duration = Duration::from_secs(7);

/// Generic acknowledgment when a handler failed (upstream errors and the
/// like). No internals are surfaced to the user.
const GENERIC_FAILURE_NOTICE: &str =
    "⚠️ Something went wrong on my end. Give it another try in a moment.";

/// Shared application state accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub settings: Arc<Settings>,
    /// Loaded prompt lists.
    pub prompts: Arc<PromptStore>,
    /// Upstream poll client.
    pub polls: PollClient,
    /// Cooldown tracker consulted before every dispatch.
    pub cooldowns: Arc<CooldownManager>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Builds the framework options: command list with aliases, prefix
/// configuration, the cooldown check, and the error handler.
pub fn framework_options(settings: &Settings) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![
            crate::help::help(),
            crate::truth::truth(),
            crate::dare::dare(),
            crate::never::never(),
            crate::thisorthat::thisorthat(),
            crate::wouldyourather::wouldyourather(),
            crate::pressthebutton::willyoupressthebutton(),
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(settings.bot.prefix.clone()),
            case_insensitive_commands: true,
            ..Default::default()
        },
        command_check: Some(|ctx| Box::pin(enforce_cooldown(ctx))),
        on_error: |err| Box::pin(handle_framework_error(err)),
        ..Default::default()
    }
}

/// Cooldown middleware, run before every dispatch.
///
/// Poise resolves aliases to the canonical command first, so every alias
/// shares one bucket. Commands without a policy pass through.
async fn enforce_cooldown(ctx: Context<'_>) -> Result<bool, Error> {
    let command = ctx.command().name.as_str();
    let Some(policy) = policy_for(command) else {
        return Ok(true);
    };

    let scope_id = match policy.scope {
        CooldownScope::User => ctx.author().id.get(),
        CooldownScope::Channel => ctx.channel_id().get(),
    };

    ctx.data()
        .cooldowns
        .check_and_consume(command, &policy, scope_id, Instant::now())
        .map_err(|e| -> Error { Box::new(e) })?;

    Ok(true)
}

/// Central error boundary. Nothing that happens in a handler is allowed
/// to escape and take down the dispatch loop.
async fn handle_framework_error(err: poise::FrameworkError<'_, Data, Error>) {
    match err {
        poise::FrameworkError::CommandCheckFailed {
            error: Some(error),
            ctx,
            ..
        } => {
            if let Some(cooldown) = error.downcast_ref::<CooldownError>() {
                notify_cooldown(ctx, cooldown).await;
            } else {
                warn!(
                    command = %ctx.command().name,
                    "command check failed: {error}"
                );
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().name,
                "command failed: {error}"
            );
            if let Err(e) = ctx.say(GENERIC_FAILURE_NOTICE).await {
                warn!("failed to send failure notice: {e}");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("error while handling framework error: {e}");
            }
        }
    }
}

/// Tells the user to retry later and removes the notice after a fixed
/// delay so channels do not fill up with cooldown chatter.
async fn notify_cooldown(ctx: Context<'_>, cooldown: &CooldownError) {
    let notice = format!("⛔ **{cooldown}**");
    let sent = match ctx.say(notice).await {
        Ok(handle) => handle.into_message().await,
        Err(e) => Err(e),
    };

    match sent {
        Ok(message) => {
            let http = ctx.serenity_context().http.clone();
            tokio::spawn(async move {
                tokio::time::sleep(COOLDOWN_NOTICE_TTL).await;
                if let Err(e) = http
                    .delete_message(message.channel_id, message.id, None)
                    .await
                {
                    warn!("failed to remove cooldown notice: {e}");
                }
            });
        }
        Err(e) => warn!("failed to send cooldown notice: {e}"),
    }
}
