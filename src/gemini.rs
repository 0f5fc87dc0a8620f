use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::GeminiConfig;
use crate::error::{BotError, Result};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_query(query: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: query }],
            }],
        }
    }
}

// Every level is lenient so a missing key shows up as a missing answer, not a parse error.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Extract the first candidate's first text part from a raw response body.
fn extract_answer(body: &str) -> Option<String> {
    serde_json::from_str::<GenerateContentResponse>(body)
        .ok()?
        .into_first_text()
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint()?,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one query to `generateContent` and return the answer text.
    pub async fn generate(&self, query: &str) -> Result<String> {
        debug!(
            "Sending {} character query to Gemini model {}",
            query.chars().count(),
            self.model
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(&GenerateContentRequest::from_query(query))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        info!("API Response: {body}");

        if status != reqwest::StatusCode::OK {
            error!("Error from Gemini API: {status}, {body}");
            return Err(BotError::GeminiApi { status, body });
        }

        extract_answer(&body).ok_or(BotError::UnexpectedResponse { body })
    }
}
