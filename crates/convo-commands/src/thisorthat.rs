//! This-or-that command.

use crate::embeds::send_vote;
use crate::framework::{Context, Error};
use convo_games::render::render_this_or_that;
use convo_games::PromptCategory;

/// Get a this or that question.
#[poise::command(prefix_command, aliases("tot", "tt"))]
pub async fn thisorthat(ctx: Context<'_>) -> Result<(), Error> {
    let entry = ctx.data().prompts.draw(PromptCategory::ThisOrThat)?;
    send_vote(ctx, render_this_or_that(&entry)).await
}
