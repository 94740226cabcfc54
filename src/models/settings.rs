//! Settings Models
//!
//! Application configuration stored in config.json.

use edumorph_core::proxy::ProxyConfig;
use edumorph_llm::{ProviderConfig, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Environment variable holding the backend credential unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable the credential is read from
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Backend base URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: None,
            temperature: None,
            max_output_tokens: None,
            proxy: None,
        }
    }
}

impl AppConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env must name an environment variable".to_string());
        }

        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(format!("Invalid temperature: {}. Must be between 0.0 and 2.0", t));
            }
        }

        if self.max_output_tokens == Some(0) {
            return Err("max_output_tokens must be positive".to_string());
        }

        if let Some(proxy) = &self.proxy {
            proxy.validate().map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Provider settings for this configuration and an already-read credential
    pub fn provider_config(&self, api_key: Option<String>) -> ProviderConfig {
        ProviderConfig {
            api_key,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            proxy: self.proxy.clone(),
        }
    }
}
