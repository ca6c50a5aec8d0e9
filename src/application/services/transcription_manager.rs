use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{TranscriptionError, TranscriptionProvider};
use crate::domain::{TranscriptionResult, TranscriptionSettings};
use crate::infrastructure::audio::pcm::probe_duration;
use crate::infrastructure::audio::validation::validate_audio_file;

/// Best-effort progress notification: status message plus a completion
/// fraction, -1.0 signalling failure.
pub type ProgressFn = dyn Fn(&str, f32) + Send + Sync;

/// Orchestrates a single file transcription: validate, probe duration,
/// delegate to the selected provider, attach file metadata.
pub struct TranscriptionManager {
    provider: Arc<dyn TranscriptionProvider>,
    settings: TranscriptionSettings,
}

impl TranscriptionManager {
    pub fn new(provider: Arc<dyn TranscriptionProvider>, settings: TranscriptionSettings) -> Self {
        Self { provider, settings }
    }

    pub fn available_models(&self) -> Vec<String> {
        self.provider.available_models()
    }

    pub async fn transcribe_file(
        &self,
        audio_path: &Path,
        progress: Option<&ProgressFn>,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        notify(progress, "Validating audio file...", 0.1);

        validate_audio_file(audio_path)?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        let file_size = std::fs::metadata(audio_path)
            .map_err(|e| TranscriptionError::InvalidAudio(format!("stat: {}", e)))?
            .len();
        let duration = probe_duration(audio_path);

        tracing::info!(
            file = %file_name,
            size_mb = file_size as f64 / (1024.0 * 1024.0),
            duration_secs = ?duration,
            "Transcribing file"
        );

        notify(progress, "Starting transcription...", 0.2);

        let transcript = match self
            .provider
            .transcribe(
                audio_path,
                self.settings.language.as_deref(),
                self.settings.prompt.as_deref(),
            )
            .await
        {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, file = %file_name, "Transcription failed");
                notify(progress, &format!("Transcription failed: {}", e), -1.0);
                return Err(e);
            }
        };

        notify(progress, "Transcription complete!", 1.0);
        tracing::info!(file = %file_name, "Transcription completed successfully");

        Ok(TranscriptionResult {
            text: transcript.text,
            language: transcript.language,
            segments: transcript.segments,
            source: transcript.source,
            file_name,
            file_size,
            duration: duration.or(transcript.duration),
            settings: self.settings.clone(),
        })
    }
}

fn notify(progress: Option<&ProgressFn>, message: &str, fraction: f32) {
    if let Some(callback) = progress {
        callback(message, fraction);
    }
}
