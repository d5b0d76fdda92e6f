//! Dare command.

use crate::framework::{Context, Error};
use convo_games::PromptCategory;

/// Get a dare.
#[poise::command(prefix_command, aliases("d"))]
pub async fn dare(ctx: Context<'_>) -> Result<(), Error> {
    let prompt = ctx.data().prompts.draw(PromptCategory::Dares)?;
    ctx.say(format!("**Dare:** {prompt}")).await?;
    Ok(())
}
