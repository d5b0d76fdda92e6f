//! Never-have-I-ever command.

use crate::framework::{Context, Error};
use convo_games::PromptCategory;

/// Get a never have I ever question.
#[poise::command(prefix_command, aliases("neverhaveiever", "nhie", "ever", "n"))]
pub async fn never(ctx: Context<'_>) -> Result<(), Error> {
    let prompt = ctx.data().prompts.draw(PromptCategory::NeverHaveIEver)?;
    ctx.say(format!("**Never have I ever** {prompt}")).await?;
    Ok(())
}
