//! Sync HTTP client for the Gemini generateContent API.
//!
//! Uses ureq, so no async runtime is needed for one blocking call per
//! scored file. The API key is never embedded; it comes from the
//! environment.

use crate::error::{CodegradeError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct ReviewClient {
    model: String,
    api_key: String,
    agent: ureq::Agent,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // status codes handled below
        .timeout_global(Some(Duration::from_secs(120))) // generation can be slow
        .build()
        .new_agent()
}

impl ReviewClient {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            agent: make_agent(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key =
            env::var(API_KEY_ENV).map_err(|_| CodegradeError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(model, api_key))
    }

    /// Sends the prompt and returns the generated review text. Every
    /// failure mode here is terminal for scoring: with no text there is
    /// nothing to extract a score from.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_bytes = prompt.len(), "requesting review");

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .send_json(&body)
            .map_err(|err| CodegradeError::Api {
                status: 0,
                message: err.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.into_body().read_to_string().unwrap_or_default();
            return Err(CodegradeError::Api { status, message });
        }

        let resp: GenerateResponse = response
            .into_body()
            .read_json()
            .map_err(|err| CodegradeError::ApiResponse(err.to_string()))?;

        resp.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| CodegradeError::ApiResponse("no candidates in response".to_string()))
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
