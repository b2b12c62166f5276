use std::sync::Arc;

use hireflow_common::{HireflowError, Result, Settings};
use serde::{Deserialize, Serialize};

use crate::client::LlmClient;
use crate::openai::OpenAiClient;
use crate::retry::{RetryConfig, RetryingClient};

/// Completion-provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name, e.g. `gpt-4`
    #[serde(default)]
    pub model: Option<String>,

    /// API key; resolved from deployment settings when built that way
    pub api_key: Option<String>,

    /// Endpoint override for OpenAI-compatible servers
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default)]
    pub retry: RetryConfig,
}

impl LlmConfig {
    /// Derive the provider configuration from deployment settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            model: None,
            api_key: Some(settings.openai_api_key.clone()),
            api_url: None,
            max_tokens: None,
            retry: RetryConfig::default(),
        }
    }
}

/// Assemble the completion client: OpenAI transport wrapped in the retry
/// layer. Fails if no API key is configured.
pub fn build_llm_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| HireflowError::Config("OpenAI requires an API key".to_string()))?;

    let base = OpenAiClient::new(config.api_url.clone(), config.model.clone(), api_key);
    let retrying = RetryingClient::new(base, config.retry.clone());

    Ok(Arc::new(retrying))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_CONFIG: &str = r#"
model = "gpt-4"
api_key = "sk-test"

[retry]
max_retries = 5
initial_delay_ms = 1000
max_delay_ms = 60000
backoff_multiplier = 3.0
"#;

    #[test]
    fn deserialize_config_from_toml() {
        let config: LlmConfig = toml::from_str(TOML_CONFIG).unwrap();
        assert_eq!(config.model.as_deref(), Some("gpt-4"));
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert!(config.api_url.is_none());
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.initial_delay_ms, 1000);
    }

    #[test]
    fn deserialize_config_defaults() {
        let config: LlmConfig = toml::from_str("api_key = \"sk-test\"").unwrap();
        assert!(config.model.is_none());
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.retry.initial_delay_ms, 500);
    }

    #[test]
    fn build_client_with_key() {
        let config = LlmConfig {
            model: Some("gpt-4".to_string()),
            api_key: Some("sk-test".to_string()),
            api_url: None,
            max_tokens: None,
            retry: RetryConfig::default(),
        };
        let client = build_llm_client(&config).unwrap();
        assert_eq!(client.model_name(), "gpt-4");
    }

    #[test]
    fn build_without_key_fails() {
        let config = LlmConfig {
            model: None,
            api_key: None,
            api_url: None,
            max_tokens: None,
            retry: RetryConfig::default(),
        };
        assert!(matches!(
            build_llm_client(&config),
            Err(HireflowError::Config(_))
        ));
    }

    #[test]
    fn config_from_settings_uses_openai_key() {
        let settings = Settings::from_lookup(|key| match key {
            "SECRET_KEY" => Some("s".into()),
            "DATABASE_URL" => Some("postgres://localhost/hireflow".into()),
            "OPENAI_API_KEY" => Some("sk-from-env".into()),
            "PINECONE_API_KEY" => Some("pc".into()),
            "PINECONE_ENVIRONMENT" => Some("us-east-1".into()),
            "PINECONE_INDEX_NAME" => Some("candidates".into()),
            _ => None,
        })
        .unwrap();

        let config = LlmConfig::from_settings(&settings);
        assert_eq!(config.api_key.as_deref(), Some("sk-from-env"));
        let client = build_llm_client(&config).unwrap();
        assert_eq!(client.model_name(), "gpt-4");
    }
}
