use serde::{Deserialize, Serialize};

use super::settings::TranscriptionSettings;

/// A timed span of transcript text. Segments are chronological and
/// immutable once produced by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Transcription output for a single audio file: the provider's transcript
/// augmented with file metadata by the transcription manager.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    /// Detected or requested language code; None when neither is known.
    pub language: Option<String>,
    pub segments: Vec<TranscriptSegment>,
    /// Tag naming the provider that produced the transcript.
    pub source: String,
    pub file_name: String,
    pub file_size: u64,
    /// Duration in seconds; None when the probe could not determine it.
    pub duration: Option<f64>,
    pub settings: TranscriptionSettings,
}
