//! Ollama `/api/generate` client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::TextGenerator;
use crate::core::error::GenerationFailure;
use crate::error::Result;
use crate::settings::Settings;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    stream: bool,
    options: GenerateOptions,
}

/// Ollama reads sampling parameters from `options`
#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
    ) -> std::result::Result<String, GenerationFailure> {
        let url = self.endpoint();
        debug!("POST {url} (model={model}, prompt {} bytes)", prompt.len());

        let request = GenerateRequest {
            model,
            prompt,
            temperature,
            stream: false,
            options: GenerateOptions { temperature },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Generation request to {url} failed: {e}");
                GenerationFailure::connection(format!("request to {url} failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            GenerationFailure::connection(format!("failed to read response body: {e}"))
        })?;

        if !status.is_success() {
            warn!("Generation backend returned {status}");
            let detail = body.trim();
            let message = if detail.is_empty() {
                format!("backend returned {status}")
            } else {
                format!("backend returned {status}: {detail}")
            };
            return Err(GenerationFailure::status(message));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            GenerationFailure::malformed_body(format!("response is not valid JSON: {e}"))
        })?;

        parsed.response.ok_or_else(|| {
            GenerationFailure::malformed_body("response body has no 'response' field")
        })
    }
}
