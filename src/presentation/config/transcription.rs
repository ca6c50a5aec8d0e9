use std::str::FromStr;

use crate::domain::{TranscriptionSettings, VALID_LOCAL_MODELS};

const DEFAULT_MODEL: &str = "base";
const DEFAULT_BEST_OF: u32 = 5;
const DEFAULT_BEAM_SIZE: u32 = 5;
const DEFAULT_API_ENDPOINT: &str = "/v1/transcriptions";
const DEFAULT_THIRD_PARTY_BASE_URL: &str = "https://api.whisper-api.com";

/// Field-by-field overrides layered on top of environment defaults.
#[derive(Debug, Clone, Default)]
pub struct TranscriptionOverrides {
    pub provider: Option<String>,
    pub model_name: Option<String>,
    /// Legacy flag: true selects the hosted OpenAI API when no explicit
    /// provider name is given.
    pub use_openai_api: Option<bool>,
    pub language: Option<String>,
    pub prompt: Option<String>,
    pub temperature: Option<f32>,
    pub best_of: Option<u32>,
    pub beam_size: Option<u32>,
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub api_endpoint: Option<String>,
}

/// Build a normalized settings record from overrides layered on
/// environment defaults, then clamp fields to their legal ranges.
///
/// All corrections are silent: an out-of-range value is reset to its
/// default, never rejected. Unrecognized provider names pass through
/// untouched; provider construction is where they fail.
pub fn resolve(overrides: &TranscriptionOverrides) -> TranscriptionSettings {
    let use_openai_api = overrides
        .use_openai_api
        .unwrap_or_else(|| env_flag("USE_OPENAI_WHISPER_API"));

    let provider = overrides
        .provider
        .clone()
        .or_else(|| env_non_empty("WHISPER_PROVIDER"))
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| {
            if use_openai_api {
                "openai".to_string()
            } else {
                "local".to_string()
            }
        });

    let mut model_name = overrides
        .model_name
        .clone()
        .or_else(|| env_non_empty("WHISPER_MODEL"))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    if provider == "local" && !VALID_LOCAL_MODELS.contains(&model_name.as_str()) {
        model_name = DEFAULT_MODEL.to_string();
    }

    let mut temperature = overrides
        .temperature
        .unwrap_or_else(|| env_parse("WHISPER_TEMPERATURE", 0.0));
    if !(0.0..=1.0).contains(&temperature) {
        temperature = 0.0;
    }

    let mut best_of = overrides
        .best_of
        .unwrap_or_else(|| env_parse("WHISPER_BEST_OF", DEFAULT_BEST_OF));
    if best_of < 1 {
        best_of = DEFAULT_BEST_OF;
    }

    let mut beam_size = overrides
        .beam_size
        .unwrap_or_else(|| env_parse("WHISPER_BEAM_SIZE", DEFAULT_BEAM_SIZE));
    if beam_size < 1 {
        beam_size = DEFAULT_BEAM_SIZE;
    }

    let mut api_base_url = overrides
        .api_base_url
        .clone()
        .or_else(|| env_non_empty("WHISPER_API_BASE_URL"));
    if provider == "whisper_api" && api_base_url.is_none() {
        api_base_url = Some(DEFAULT_THIRD_PARTY_BASE_URL.to_string());
    }

    // The API key is never defaulted; its absence is surfaced at provider
    // construction, not here.
    let api_key = overrides
        .api_key
        .clone()
        .or_else(|| env_non_empty("WHISPER_API_KEY"));

    let api_endpoint = overrides
        .api_endpoint
        .clone()
        .filter(|e| !e.trim().is_empty())
        .or_else(|| env_non_empty("WHISPER_API_ENDPOINT"))
        .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

    TranscriptionSettings {
        provider,
        model_name,
        language: overrides
            .language
            .clone()
            .or_else(|| env_non_empty("WHISPER_LANGUAGE")),
        prompt: overrides
            .prompt
            .clone()
            .or_else(|| env_non_empty("WHISPER_PROMPT")),
        temperature,
        best_of,
        beam_size,
        api_base_url,
        api_key,
        api_endpoint,
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| {
            let v = v.trim().to_lowercase();
            v == "true" || v == "1"
        })
        .unwrap_or(false)
}

fn env_parse<T: FromStr + Copy>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
