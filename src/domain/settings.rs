use serde::Serialize;

/// Local Whisper model sizes accepted by the resolver.
pub const VALID_LOCAL_MODELS: [&str; 7] = [
    "tiny", "base", "small", "medium", "large", "large-v2", "large-v3",
];

/// Normalized transcription configuration.
///
/// Built once per transcription request by the configuration resolver and
/// never mutated afterwards. The provider field holds a normalized
/// (trimmed, lowercased) name; unrecognized names survive resolution and
/// are rejected when the provider is constructed. Fields that do not apply
/// to the active provider are carried along and ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptionSettings {
    /// "local", "openai" or "whisper_api".
    pub provider: String,
    /// Local model size name (tiny .. large-v3).
    pub model_name: String,
    /// Language code to pin transcription to; None = auto-detect.
    pub language: Option<String>,
    /// Initial prompt to seed the transcription with.
    pub prompt: Option<String>,
    /// Sampling temperature, clamped to [0, 1].
    pub temperature: f32,
    /// Greedy decoding candidates, at least 1.
    pub best_of: u32,
    /// Beam search width, at least 1.
    pub beam_size: u32,
    /// Third-party API base URL.
    pub api_base_url: Option<String>,
    /// Third-party API credential. Never defaulted.
    pub api_key: Option<String>,
    /// Third-party API path suffix.
    pub api_endpoint: String,
}
