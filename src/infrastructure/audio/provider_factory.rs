use std::sync::Arc;

use crate::application::ports::{TranscriptionError, TranscriptionProvider};
use crate::domain::TranscriptionSettings;

use super::http_whisper_engine::HttpWhisperEngine;
use super::local_whisper_engine::LocalWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionProviderFactory;

impl TranscriptionProviderFactory {
    /// Construct the backend named by the settings record. An unrecognized
    /// provider name is a configuration error, raised here and never
    /// retried.
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionProvider>, TranscriptionError> {
        match settings.provider.as_str() {
            "local" => Ok(Arc::new(LocalWhisperEngine::new(settings))),
            "openai" => {
                let engine = OpenAiWhisperEngine::from_env()?;
                Ok(Arc::new(engine))
            }
            "whisper_api" => {
                let engine = HttpWhisperEngine::new(settings)?;
                Ok(Arc::new(engine))
            }
            other => Err(TranscriptionError::Configuration(format!(
                "unknown transcription provider: {}",
                other
            ))),
        }
    }
}
