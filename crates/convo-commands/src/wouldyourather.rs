//! Would-you-rather command, backed by either.io.

use crate::embeds::send_vote;
use crate::framework::{Context, Error};
use convo_games::render::render_poll;

/// Get a would you rather question.
#[poise::command(prefix_command, aliases("wyr", "rather"))]
pub async fn wouldyourather(ctx: Context<'_>) -> Result<(), Error> {
    let poll = ctx.data().polls.fetch_would_you_rather().await?;
    send_vote(ctx, render_poll(&poll)).await
}
