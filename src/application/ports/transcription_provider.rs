use std::path::Path;

use async_trait::async_trait;

use crate::domain::TranscriptSegment;

/// Transcript as returned by a provider, before the manager attaches file
/// metadata.
#[derive(Debug, Clone)]
pub struct ProviderTranscript {
    pub text: String,
    pub language: Option<String>,
    /// Duration reported by the provider, when it reports one.
    pub duration: Option<f64>,
    pub segments: Vec<TranscriptSegment>,
    /// Tag naming the producing provider, e.g. "openai_api".
    pub source: String,
}

/// One interchangeable speech-to-text backend.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
        prompt: Option<&str>,
    ) -> Result<ProviderTranscript, TranscriptionError>;

    fn available_models(&self) -> Vec<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// Missing credential, unrecognized provider name. Raised at
    /// construction, never retried.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// File missing, oversized or of an unsupported format. Rejected
    /// before any network call.
    #[error("invalid audio file: {0}")]
    InvalidAudio(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
