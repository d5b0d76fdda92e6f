//! Will-you-press-the-button command, backed by willyoupressthebutton.com.

use crate::embeds::send_vote;
use crate::framework::{Context, Error};
use convo_games::render::render_poll;

/// Get a will you press the button question.
#[poise::command(prefix_command, aliases("wyp", "button"))]
pub async fn willyoupressthebutton(ctx: Context<'_>) -> Result<(), Error> {
    let poll = ctx.data().polls.fetch_press_the_button().await?;
    send_vote(ctx, render_poll(&poll)).await
}
