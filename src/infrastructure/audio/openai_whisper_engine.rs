use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{ProviderTranscript, TranscriptionError, TranscriptionProvider};
use crate::domain::TranscriptSegment;

use super::validation::mime_for_extension;

const OPENAI_WHISPER_MODEL: &str = "whisper-1";

/// Hosted OpenAI Whisper API backend.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiWhisperEngine {
    /// Construct from the process environment. The credential must be
    /// present at construction time; no request is attempted without it.
    pub fn from_env() -> Result<Self, TranscriptionError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                TranscriptionError::Configuration(
                    "OPENAI_API_KEY environment variable not set".to_string(),
                )
            })?;
        Ok(Self::new(api_key, None))
    }

    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct VerboseTranscriptionResponse {
    text: String,
    language: Option<String>,
    duration: Option<f64>,
    #[serde(default)]
    segments: Vec<VerboseSegment>,
}

#[derive(Deserialize)]
struct VerboseSegment {
    start: f64,
    end: f64,
    text: String,
}

#[async_trait]
impl TranscriptionProvider for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
        prompt: Option<&str>,
    ) -> Result<ProviderTranscript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

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

        let mut form = multipart::Form::new()
            .text("model", OPENAI_WHISPER_MODEL)
            .text("response_format", "verbose_json")
            .part("file", file_part);
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }
        if let Some(prompt) = prompt {
            form = form.text("prompt", prompt.to_string());
        }

        tracing::debug!(model = OPENAI_WHISPER_MODEL, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
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

        let result: VerboseTranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            segments = result.segments.len(),
            "OpenAI Whisper transcription completed"
        );

        Ok(ProviderTranscript {
            text: result.text,
            language: result.language,
            duration: result.duration,
            segments: result
                .segments
                .into_iter()
                .map(|s| TranscriptSegment {
                    start: s.start,
                    end: s.end,
                    text: s.text,
                })
                .collect(),
            source: "openai_api".to_string(),
        })
    }

    fn available_models(&self) -> Vec<String> {
        vec![OPENAI_WHISPER_MODEL.to_string()]
    }
}
