use serde::{ Deserialize, Serialize };
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::implementations::prompts;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_EXPORT_DIR: &str = "exports";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid config value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Generation endpoint of the local model server
    pub api_endpoint: Option<String>,

    /// Model to use when none is given on the command line
    pub model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Configuration for the local LLM backend
    pub llm_api: ApiConfig,

    /// Prompt templates keyed by name (`system`, `generation`, `refinement`)
    pub prompt_templates: HashMap<String, String>,

    /// Directory exports land in when no explicit path is given
    pub export_dir: Option<String>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    ///
    /// Templates missing from the file keep their built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config: GeneratorConfig = serde_yaml::from_str(&contents)?;
        for (name, template) in prompts::default_templates() {
            config.prompt_templates.entry(name).or_insert(template);
        }
        config.validate()?;
        Ok(config)
    }

    /// Apply `OLLAMA_URL` / `OLLAMA_MODEL` overrides from the environment
    ///
    /// Blank values are ignored. The result is validated again.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(std::env::var("OLLAMA_URL").ok(), std::env::var("OLLAMA_MODEL").ok())
    }

    /// Replace the endpoint and default model with any non-blank values given
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        model: Option<String>
    ) -> Result<Self, ConfigError> {
        use log::debug;

        if let Some(url) = endpoint.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            debug!("Using endpoint override {}", url);
            self.llm_api.api_endpoint = Some(url);
        }
        if let Some(model) = model.map(|m| m.trim().to_string()).filter(|m| !m.is_empty()) {
            debug!("Using model override {}", model);
            self.llm_api.model = Some(model);
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.llm_api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "llm_api.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if let Some(endpoint) = &self.llm_api.api_endpoint {
            if endpoint.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "llm_api.api_endpoint".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn endpoint(&self) -> String {
        self.llm_api.api_endpoint.clone().unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string())
    }

    /// The model to call: an explicit override wins over the configured default
    pub fn model(&self, requested: Option<&str>) -> String {
        requested
            .filter(|m| !m.trim().is_empty())
            .map(|m| m.trim().to_string())
            .or_else(|| self.llm_api.model.clone().filter(|m| !m.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.llm_api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn export_dir(&self) -> String {
        self.export_dir.clone().unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string())
    }

    /// Get the template for a specific task
    pub fn get_template(&self, template_name: &str) -> Option<String> {
        self.prompt_templates.get(template_name).cloned()
    }
}

/// Default configuration
impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            llm_api: ApiConfig {
                api_endpoint: Some(DEFAULT_OLLAMA_URL.to_string()),
                model: Some(DEFAULT_MODEL.to_string()),
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            },
            prompt_templates: prompts::default_templates(),
            export_dir: Some(DEFAULT_EXPORT_DIR.to_string()),
        }
    }
}
