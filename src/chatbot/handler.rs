//! Main handler for inbound text messages.

use log::{debug, info, warn};
use poise::serenity_prelude::{Context, Message as SerenityMessage};

use crate::bot::Data;
use crate::error::Result;

use super::query::{extract_query, is_addressed};
use super::response::{PLACEHOLDER_MESSAGE, edit_placeholder};

/// Relay a user's message to the AI service.
///
/// Direct messages are always relayed. In servers the bot only answers messages that
/// mention it (or reply to it). A placeholder is posted right away and edited with the
/// answer once the relay returns.
pub async fn handle_text_message(
    ctx: &Context,
    new_message: &SerenityMessage,
    data: &Data,
) -> Result<()> {
    let bot_user_id = ctx.cache.current_user().id;
    let addressed = is_addressed(
        new_message.author.bot,
        new_message.guild_id.is_some(),
        new_message.mentions_user_id(bot_user_id),
        new_message
            .referenced_message
            .as_ref()
            .map(|replied| replied.author.id),
        bot_user_id,
    );

    let Some(query) = extract_query(&new_message.content, bot_user_id, addressed) else {
        debug!(
            "Ignoring message {} in channel {}",
            new_message.id, new_message.channel_id
        );
        return Ok(());
    };

    info!(
        "Received query from {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    let mut placeholder = new_message.reply(&ctx.http, PLACEHOLDER_MESSAGE).await?;

    let result = data.relay().relay(&query).await;
    if !result.is_success() {
        warn!(
            "Relay for message {} from {} did not produce an answer",
            new_message.id,
            new_message.author.tag()
        );
    }

    edit_placeholder(ctx, &mut placeholder, &result.into_text()).await?;
    info!(
        "Answered {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    Ok(())
}
