use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, ChatClientError};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "qwen/qwen-1.5-72b-chat";

/// OpenRouter chat-completions client used for minutes generation.
///
/// Requests are deterministic in intent: temperature 0 and a fixed model.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    site_url: String,
    app_name: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            site_url: std::env::var("APP_SITE_URL")
                .unwrap_or_else(|_| "https://your-app.com".to_string()),
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "MeetingMinutesApp".to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            std::env::var("OPENROUTER_BASE_URL").ok(),
            std::env::var("OPENROUTER_MODEL").ok(),
        )
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, ChatClientError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_message,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };

        tracing::debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.app_name)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatClientError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatClientError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatClientError::InvalidResponse(format!("parse response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatClientError::InvalidResponse("no choices in response".to_string()))?;

        tracing::debug!(chars = content.len(), "Chat completion received");

        Ok(content)
    }
}
