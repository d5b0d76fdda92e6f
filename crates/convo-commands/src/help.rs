//! Help command: about text, game list, and invite links.

use crate::framework::{Context, Error};
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, UserId};

/// OAuth2 invite link with the permissions the bot needs.
fn invite_url(bot_id: UserId) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={bot_id}&permissions=280640&scope=bot"
    )
}

/// General info about the bot and command help.
#[poise::command(prefix_command, aliases("commands"))]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let settings = &ctx.data().settings;
    let prefix = &settings.bot.prefix;
    let bot_id = ctx.serenity_context().cache.current_user().id;

    let embed = CreateEmbed::new()
        .title("Conversational Games Bot")
        .url("https://github.com/posetack/discord-conversational-games-bot")
        .field(
            "» About",
            "Hello! I'm a Conversational Games Bot. I have a huge database of \
             questions for text based games such as Truth or Dare, Never Have I \
             Ever, Would You Rather, etc... I can help keep your chat active and \
             fun :)",
            false,
        )
        .field(
            "» Games",
            format!(
                "• Truth or Dare (`{prefix}(t)ruth`, `{prefix}(d)are`)\n\
                 • Never Have I Ever (`{prefix}(n)ever`)\n\
                 • Would You Rather (`{prefix}wyr`)\n\
                 • This Or That (`{prefix}tot`)\n\
                 • Will You Press The Button (`{prefix}wyp`)"
            ),
            false,
        )
        .field(
            "» Links",
            format!(
                "🔗 **[Invite me to your server!]({})**\n\
                 🔗 **[Support / Suggestions / Feedback]({})**",
                invite_url(bot_id),
                settings.bot.support_server
            ),
            false,
        )
        .footer(CreateEmbedFooter::new("Made with ❤️ by PoseTack#1700"));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
