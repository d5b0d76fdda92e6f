//! Conversion of render-pipeline payloads into Discord embeds.

use crate::framework::{Context, Error};
use convo_games::VoteDisplay;
use poise::serenity_prelude::{
    Colour, CreateEmbed, CreateEmbedFooter, ReactionType, Timestamp,
};

/// Builds an embed from a vote display payload.
pub fn vote_embed(display: &VoteDisplay) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .colour(Colour::new(display.accent))
        .description(display.body_lines.join("\n"))
        .timestamp(Timestamp::now());

    if let Some(title) = &display.title {
        embed = embed.title(title);
    }
    if let Some(url) = &display.url {
        embed = embed.url(url);
    }
    if let Some(footer) = &display.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    embed
}

/// Sends a vote display and attaches its reaction affordances in order.
pub async fn send_vote(ctx: Context<'_>, display: VoteDisplay) -> Result<(), Error> {
    let reply = poise::CreateReply::default().embed(vote_embed(&display));
    let handle = ctx.send(reply).await?;

    if let Some(reactions) = display.reactions {
        let message = handle.into_message().await?;
        for token in reactions {
            message
                .react(
                    ctx.serenity_context(),
                    ReactionType::Unicode(token.to_string()),
                )
                .await?;
        }
    }

    Ok(())
}
