use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::Serialize;

use crate::errors::{ CaseGenError, CaseGenResult };
use crate::implementations::config::GeneratorConfig;
use crate::traits::text_generator::TextGenerator;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Client for a local Ollama server's `/api/generate` endpoint
#[derive(Clone)]
pub struct OllamaGenerator {
    endpoint: String,
    http_client: reqwest::Client,
}

impl OllamaGenerator {
    pub fn new(config: &GeneratorConfig) -> CaseGenResult<Self> {
        let http_client = reqwest::Client
            ::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| backend_error(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn backend_error(detail: impl std::fmt::Display) -> CaseGenError {
    CaseGenError::BackendError(format!("Error calling Ollama: {}", detail))
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str, model: &str) -> CaseGenResult<String> {
        info!("Making generation request to {}", self.endpoint);
        debug!("Model: {}", model);
        debug!("Prompt length: {} characters", prompt.len());

        let request = GenerateRequest { model, prompt, stream: false };

        let response = self.http_client
            .post(&self.endpoint)
            .json(&request)
            .send().await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - is the Ollama server running?");
                }
                backend_error(e)
            })?;

        let response = response.error_for_status().map_err(|e| {
            warn!("Backend returned an error status: {}", e);
            backend_error(e)
        })?;

        let data: serde_json::Value = response.json().await.map_err(|e| {
            warn!("Failed to decode response body: {}", e);
            backend_error(e)
        })?;

        // Non-streaming generate puts the text under `response`
        let text = match data.get("response").and_then(|v| v.as_str()) {
            Some(text) => text.to_string(),
            None => {
                warn!("Response has no `response` field, returning the whole body");
                data.to_string()
            }
        };

        debug!("Response length: {} characters", text.len());
        Ok(text)
    }
}
