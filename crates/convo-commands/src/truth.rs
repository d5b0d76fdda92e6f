//! Truth command.

use crate::framework::{Context, Error};
use convo_games::PromptCategory;

/// Get a truth question.
#[poise::command(prefix_command, aliases("t"))]
pub async fn truth(ctx: Context<'_>) -> Result<(), Error> {
    let prompt = ctx.data().prompts.draw(PromptCategory::Truths)?;
    ctx.say(format!("**Truth:** {prompt}")).await?;
    Ok(())
}
