//! Poise commands.

use crate::bot::Data;
use crate::error::{BotError, Result};

/// Prefix for text commands. Messages starting with it are never relayed.
pub const COMMAND_PREFIX: &str = "!";

pub const GREETING_MESSAGE: &str =
    "Hi! Send me an inquiry and I will ask Google Gemini AI for you.";

type Context<'a> = poise::Context<'a, Data, BotError>;

/// Say hello and explain how to use the bot.
#[poise::command(slash_command, prefix_command)]
pub async fn start(ctx: Context<'_>) -> Result<()> {
    ctx.say(GREETING_MESSAGE).await?;
    Ok(())
}

/// Get all bot commands.
#[must_use]
pub fn commands() -> Vec<poise::Command<Data, BotError>> {
    vec![start()]
}
