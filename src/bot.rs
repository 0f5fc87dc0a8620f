//! Discord bot setup and event dispatch.

use log::{debug, error, info, warn};
use poise::{
    Framework, FrameworkError, FrameworkOptions, PrefixFrameworkOptions, builtins,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::chatbot::handle_text_message;
use crate::commands::{COMMAND_PREFIX, commands};
use crate::config::Config;
use crate::error::{BotError, Result};
use crate::relay::QueryRelay;

/// State shared by every command and event handler.
pub struct Data {
    relay: QueryRelay,
}

impl Data {
    pub fn relay(&self) -> &QueryRelay {
        &self.relay
    }
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing Gemini relay");
    let relay = QueryRelay::new(&config.gemini)?;
    info!("Relaying queries to Gemini model {}", relay.model());

    // GUILD_MESSAGES and DIRECT_MESSAGES are part of the non-privileged set
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: commands(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                debug!("Registering commands globally");
                builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully");
                Ok(Data { relay })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> Result<()> {
    if let FullEvent::Message { new_message } = event {
        handle_text_message(ctx, new_message, data).await?;
    }
    Ok(())
}

async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            warn!(
                "Command '{}' caused error: {}",
                ctx.command().qualified_name,
                error
            );
        }
        FrameworkError::EventHandler { error, event, .. } => {
            warn!(
                "Event '{}' caused error: {}",
                event.snake_case_name(),
                error
            );
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
