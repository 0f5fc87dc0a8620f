//! Placeholder and answer delivery for Discord.

use poise::serenity_prelude::{Context, EditMessage, Message as SerenityMessage};

use crate::error::Result;

pub const PLACEHOLDER_MESSAGE: &str = "I am processing your request...";

pub const EMPTY_ANSWER_MESSAGE: &str = "The AI service returned an empty answer.";

// Discord's message limit is 2000 characters (standard users)
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Make text acceptable as Discord message content.
pub fn fit_message(text: &str) -> String {
    if text.trim().is_empty() {
        return EMPTY_ANSWER_MESSAGE.to_string();
    }
    if text.chars().count() <= DISCORD_MESSAGE_LIMIT {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(DISCORD_MESSAGE_LIMIT - 1).collect();
    truncated.push('…');
    truncated
}

/// Replace the placeholder's content with the final answer.
pub async fn edit_placeholder(
    ctx: &Context,
    placeholder: &mut SerenityMessage,
    text: &str,
) -> Result<()> {
    placeholder
        .edit(ctx, EditMessage::new().content(fit_message(text)))
        .await?;
    Ok(())
}
