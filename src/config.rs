use std::env;

use log::{debug, error, info};
use url::Url;

use crate::error::Result;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-002";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub gemini: GeminiConfig,
}

/// Everything needed to reach the `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = required_var("DISCORD_TOKEN")?;
        let api_key = required_var("GEMINI_API_KEY")?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let api_base =
            env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("Gemini API key length: {} characters", api_key.len());
        debug!("Gemini model: {model}");
        debug!("Gemini API base: {api_base}");

        Ok(Self {
            discord_token,
            gemini: GeminiConfig {
                api_key,
                model,
                api_base,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|e| {
        error!("Failed to load {name} from environment: {e}");
        e.into()
    })
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Build `<base>/models/<model>:generateContent?key=<api_key>`.
    pub fn endpoint(&self) -> Result<Url> {
        let base = self.api_base.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/models/{}:generateContent", self.model))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}
