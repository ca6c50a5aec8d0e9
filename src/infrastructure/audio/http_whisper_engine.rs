use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{ProviderTranscript, TranscriptionError, TranscriptionProvider};
use crate::domain::{TranscriptSegment, TranscriptionSettings};

use super::validation::mime_for_extension;

/// Generic third-party Whisper-compatible HTTP API backend.
///
/// Upstream response schemas drift; the transcript is read from the first
/// present of `text`, `transcript` and `result`, and those three keys are
/// the whole contract.
pub struct HttpWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpWhisperEngine {
    /// Construct from resolved settings. The credential comes from the
    /// settings record or, failing that, the `WHISPER_API_KEY` environment
    /// variable; a missing credential is a configuration error.
    pub fn new(settings: &TranscriptionSettings) -> Result<Self, TranscriptionError> {
        let base_url = settings
            .api_base_url
            .clone()
            .unwrap_or_else(|| "https://api.whisper-api.com".to_string());
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            settings.api_endpoint.trim_start_matches('/'),
        );

        let api_key = settings
            .api_key
            .clone()
            .or_else(|| std::env::var("WHISPER_API_KEY").ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TranscriptionError::Configuration(
                    "missing WHISPER_API_KEY for third-party provider".to_string(),
                )
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl TranscriptionProvider for HttpWhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
        prompt: Option<&str>,
    ) -> Result<ProviderTranscript, TranscriptionError> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::InvalidAudio(format!("read: {}", e)))?;
        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();
        let mime = audio_path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| mime_for_extension(&e.to_lowercase()))
            .unwrap_or("application/octet-stream");

        let file_part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new().part("file", file_part);
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }
        if let Some(prompt) = prompt {
            form = form.text("prompt", prompt.to_string());
        }

        tracing::debug!(endpoint = %self.endpoint, "Sending audio to third-party Whisper API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        let text = ["text", "transcript", "result"]
            .iter()
            .find_map(|key| payload.get(*key).and_then(|v| v.as_str()))
            .unwrap_or("")
            .to_string();

        let segments = payload
            .get("segments")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect::<Vec<TranscriptSegment>>()
            })
            .unwrap_or_default();

        let response_language = payload
            .get("language")
            .and_then(|v| v.as_str())
            .map(String::from)
            .or_else(|| language.map(String::from));

        tracing::info!(
            chars = text.len(),
            segments = segments.len(),
            "Third-party Whisper transcription completed"
        );

        Ok(ProviderTranscript {
            text,
            language: response_language,
            duration: None,
            segments,
            source: "third_party_api".to_string(),
        })
    }

    fn available_models(&self) -> Vec<String> {
        vec!["remote-default".to_string()]
    }
}
