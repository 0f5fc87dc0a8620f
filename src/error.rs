use reqwest::StatusCode;
use thiserror::Error;

/// Apology shown to the user when the AI service cannot be reached or answers with an error.
pub const APOLOGY_MESSAGE: &str = "Sorry, something went wrong with the AI service.";

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Invalid Gemini endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Gemini API error ({status}): {body}")]
    GeminiApi { status: StatusCode, body: String },

    #[error("Unexpected Gemini response: {body}")]
    UnexpectedResponse { body: String },

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns the text to show in the chat in place of an answer
    pub fn user_message(&self) -> String {
        match self {
            BotError::Serenity(_) => {
                "Sorry, I'm having trouble communicating with Discord right now. Please try again later.".to_string()
            }
            BotError::EnvVar(_) | BotError::Url(_) => {
                "Sorry, there's a configuration issue on my end. Please contact the bot administrator.".to_string()
            }
            BotError::UnexpectedResponse { body } => {
                format!("Unexpected response format received: {body}")
            }
            BotError::GeminiApi { .. } | BotError::Reqwest(_) => APOLOGY_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
