use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{ProviderTranscript, TranscriptionError, TranscriptionProvider};
use crate::domain::{TranscriptSegment, TranscriptionSettings, VALID_LOCAL_MODELS};

use super::pcm::decode_audio_to_pcm;

/// Local whisper.cpp backend.
///
/// Construction only records the configuration; the model file is located
/// and loaded on the first `transcribe` call and reused afterwards.
pub struct LocalWhisperEngine {
    model_name: String,
    temperature: f32,
    best_of: u32,
    beam_size: u32,
    context: OnceCell<WhisperContext>,
}

impl LocalWhisperEngine {
    pub fn new(settings: &TranscriptionSettings) -> Self {
        Self {
            model_name: settings.model_name.clone(),
            temperature: settings.temperature,
            best_of: settings.best_of,
            beam_size: settings.beam_size,
            context: OnceCell::new(),
        }
    }

    fn model_path(&self) -> PathBuf {
        let dir = std::env::var("WHISPER_MODEL_DIR").unwrap_or_else(|_| "models".to_string());
        PathBuf::from(dir).join(format!("ggml-{}.bin", self.model_name))
    }

    fn load_context(&self) -> Result<WhisperContext, TranscriptionError> {
        let model_path = self.model_path();
        if !model_path.exists() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }

        tracing::info!(
            model = %self.model_name,
            path = %model_path.display(),
            "Loading local Whisper model"
        );

        let path = model_path.to_str().ok_or_else(|| {
            TranscriptionError::ModelLoadFailed("model path is not valid UTF-8".to_string())
        })?;
        let context =
            WhisperContext::new_with_params(path, WhisperContextParameters::default())
                .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        tracing::info!(model = %self.model_name, "Local Whisper model loaded");

        Ok(context)
    }

    fn decoding_params<'a>(
        &self,
        language: Option<&'a str>,
        prompt: Option<&'a str>,
    ) -> FullParams<'a, 'a> {
        let strategy = if self.beam_size > 1 {
            SamplingStrategy::BeamSearch {
                beam_size: self.beam_size as i32,
                patience: -1.0,
            }
        } else {
            SamplingStrategy::Greedy {
                best_of: self.best_of as i32,
            }
        };

        let mut params = FullParams::new(strategy);
        params.set_language(language);
        if let Some(prompt) = prompt {
            params.set_initial_prompt(prompt);
        }
        params.set_temperature(self.temperature);
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(4) as i32;
        params.set_n_threads(threads);

        params
    }
}

#[async_trait]
impl TranscriptionProvider for LocalWhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
        prompt: Option<&str>,
    ) -> Result<ProviderTranscript, TranscriptionError> {
        let pcm = decode_audio_to_pcm(audio_path)?;

        let context = self
            .context
            .get_or_try_init(|| async { self.load_context() })
            .await?;

        let mut state = context
            .create_state()
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("state: {}", e)))?;

        state
            .full(self.decoding_params(language, prompt), &pcm)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference: {}", e)))?;

        let mut segments: Vec<TranscriptSegment> = Vec::new();
        let mut texts: Vec<String> = Vec::new();

        let num_segments = state.full_n_segments();
        for i in 0..num_segments {
            let Some(segment) = state.get_segment(i) else {
                continue;
            };
            let text = match segment.to_str() {
                Ok(t) => t.trim().to_string(),
                Err(_) => continue,
            };
            if text.is_empty() {
                continue;
            }

            // Timestamps are in centiseconds (10ms units)
            segments.push(TranscriptSegment {
                start: segment.start_timestamp() as f64 / 100.0,
                end: segment.end_timestamp() as f64 / 100.0,
                text: text.clone(),
            });
            texts.push(text);
        }

        let transcript = texts.join(" ");

        tracing::info!(
            model = %self.model_name,
            segments = segments.len(),
            chars = transcript.len(),
            "Local Whisper transcription completed"
        );

        Ok(ProviderTranscript {
            text: transcript,
            language: language.map(String::from),
            duration: None,
            segments,
            source: format!("local:{}", self.model_name),
        })
    }

    fn available_models(&self) -> Vec<String> {
        VALID_LOCAL_MODELS.iter().map(|m| m.to_string()).collect()
    }
}
