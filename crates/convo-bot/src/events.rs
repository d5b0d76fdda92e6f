//! Gateway lifecycle adapter: one handler for every event the bot cares
//! about, kept outside the command pipeline.

use convo_commands::{Data, Error};
use poise::serenity_prelude as serenity;
use rand::seq::SliceRandom;
use tracing::info;

/// Dispatches gateway lifecycle events.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                "ready: logged in as {} across {} guild(s)",
                data_about_bot.user.name,
                data_about_bot.guilds.len()
            );
            set_presence(ctx, data);
        }
        serenity::FullEvent::Resume { .. } => {
            info!("resumed gateway session");
        }
        serenity::FullEvent::GuildCreate { guild, is_new } => {
            if is_new.unwrap_or(false) {
                info!(
                    "added to guild: {} (id: {}, {} members)",
                    guild.name, guild.id, guild.member_count
                );
            }
        }
        serenity::FullEvent::GuildDelete { incomplete, full } => {
            let name = full
                .as_ref()
                .map_or("<unknown>", |guild| guild.name.as_str());
            info!("removed from guild: {} (id: {})", name, incomplete.id);
        }
        _ => {}
    }
    Ok(())
}

/// Picks one of the configured statuses at random and advertises it.
fn set_presence(ctx: &serenity::Context, data: &Data) {
    let statuses = &data.settings.bot.playing_statuses;
    if let Some(status) = statuses.choose(&mut rand::thread_rng()) {
        ctx.set_activity(Some(serenity::ActivityData::playing(status.clone())));
    }
}
