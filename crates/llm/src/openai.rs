use async_trait::async_trait;
use hireflow_common::HireflowError;
use hireflow_common::Result;
use serde::{Deserialize, Serialize};

use crate::client::{CompletionRequest, CompletionResponse, LlmClient, Role, TokenUsage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    model: String,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Chat-completions client for the OpenAI API (or any OpenAI-compatible
/// endpoint via `base_url`).
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(base_url: Option<String>, model: Option<String>, api_key: String) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    fn role_to_string(role: &Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    fn build_messages(request: &CompletionRequest) -> Vec<OpenAiMessage> {
        let mut messages = Vec::new();
        if let Some(ref system) = request.system_prompt {
            messages.push(OpenAiMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        for msg in &request.messages {
            messages.push(OpenAiMessage {
                role: Self::role_to_string(&msg.role).to_string(),
                content: msg.content.clone(),
            });
        }
        messages
    }

    /// Build the request body for testing purposes.
    #[cfg(test)]
    fn build_request_body(&self, request: &CompletionRequest) -> OpenAiRequest {
        OpenAiRequest {
            model: self.model.clone(),
            messages: Self::build_messages(request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = OpenAiRequest {
            model: self.model.clone(),
            messages: Self::build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| HireflowError::Completion(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(HireflowError::Completion(format!(
                "OpenAI API error {status}: {body_text}"
            )));
        }

        let oai_response: OpenAiResponse = response.json().await.map_err(|e| {
            HireflowError::Completion(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let choice = oai_response.choices.into_iter().next().ok_or_else(|| {
            HireflowError::Completion("No choices in OpenAI response".to_string())
        })?;

        Ok(CompletionResponse {
            content: choice.message.content,
            model: oai_response.model,
            usage: oai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ChatMessage;

    #[test]
    fn request_body_matches_openai_format() {
        let client = OpenAiClient::new(None, Some("gpt-4".to_string()), "sk-test".to_string());
        let request = CompletionRequest {
            system_prompt: Some("You are the Interviewer.".to_string()),
            messages: vec![ChatMessage::user("Hello")],
            temperature: Some(0.7),
            max_tokens: Some(512),
        };

        let body = client.build_request_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-4");
        let temp = json["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 0.001);
        assert_eq!(json["max_tokens"], 512);

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are the Interviewer.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Hello");
    }

    #[test]
    fn request_body_omits_system_when_none() {
        let client = OpenAiClient::new(None, None, "sk-test".to_string());
        let request = CompletionRequest {
            system_prompt: None,
            messages: vec![ChatMessage::user("Hello")],
            temperature: None,
            max_tokens: None,
        };

        let body = client.build_request_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");

        // temperature and max_tokens should be absent (skip_serializing_if)
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn defaults_to_openai_api_and_gpt4() {
        let client = OpenAiClient::new(None, None, "sk-test".to_string());
        assert_eq!(client.base_url, "https://api.openai.com");
        assert_eq!(client.model_name(), "gpt-4");
    }
}
