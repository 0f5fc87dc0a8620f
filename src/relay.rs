//! Query relay: one piece of user text in, one piece of answer text out.

use log::error;

use crate::config::GeminiConfig;
use crate::error::{BotError, Result};
use crate::gemini::GeminiClient;

/// Outcome of relaying a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// Answer text extracted from the first candidate
    Success(String),
    /// User-facing text describing what went wrong
    Failure(String),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    /// The text to deliver to the chat, whatever the outcome.
    pub fn into_text(self) -> String {
        match self {
            GenerationResult::Success(text) | GenerationResult::Failure(text) => text,
        }
    }
}

impl From<Result<String>> for GenerationResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(answer) => GenerationResult::Success(answer),
            Err(e) => GenerationResult::Failure(e.user_message()),
        }
    }
}

/// Stateless relay to the generation API. Safe to share across concurrent handlers.
pub struct QueryRelay {
    client: GeminiClient,
}

impl QueryRelay {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub async fn relay(&self, query: &str) -> GenerationResult {
        let result = self.client.generate(query).await;
        if let Err(BotError::Reqwest(e)) = &result {
            error!("Request to Gemini API failed: {e}");
        }
        result.into()
    }

    pub async fn answer(&self, query: &str) -> String {
        self.relay(query).await.into_text()
    }
}
