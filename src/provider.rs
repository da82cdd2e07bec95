use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Any failure talking to the text-generation service. Callers treat every
/// variant uniformly: log it and route to the fallback record.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("provider returned an empty reply")]
    EmptyReply,
}

pub trait TextProvider {
    fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Stand-in used when no credential is configured. Every call fails with
/// `MissingCredential`, which the pipeline converts into the canned record,
/// mirroring the uniform-failure contract of the real provider.
pub struct UnconfiguredProvider;

impl TextProvider for UnconfiguredProvider {
    fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::MissingCredential)
    }
}

pub fn provider_from_env(timeout_ms: u64) -> Box<dyn TextProvider> {
    match GeminiProvider::from_env(timeout_ms) {
        Ok(provider) => Box::new(provider),
        Err(err) => {
            warn!(error = %err, "text provider unavailable, extractions will use canned records");
            Box::new(UnconfiguredProvider)
        }
    }
}

pub struct GeminiProvider {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Single attempt per call, bounded timeout, no retry. On expiry or any
    /// transport error the pipeline falls back immediately.
    pub fn from_env(timeout_ms: u64) -> Result<Self, ProviderError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ProviderError::MissingCredential)?;
        let model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

impl TextProvider for GeminiProvider {
    fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0.1 }
        });

        debug!(model = %self.model, prompt_chars = prompt.len(), "provider request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let reply: GenerateContentResponse = response.json()?;
        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyReply)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
