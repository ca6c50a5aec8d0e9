use std::path::Path;

use crate::application::ports::TranscriptionError;

/// Upload size ceiling (25 MiB), matching the hosted API's limit.
pub const MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// Supported audio extensions and their MIME types.
pub const SUPPORTED_AUDIO_FORMATS: [(&str, &str); 6] = [
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("webm", "audio/webm"),
];

/// Check a file's existence, size and format before any provider call.
pub fn validate_audio_file(path: &Path) -> Result<(), TranscriptionError> {
    let metadata = std::fs::metadata(path).map_err(|_| {
        TranscriptionError::InvalidAudio(format!("file not found: {}", path.display()))
    })?;

    if !metadata.is_file() {
        return Err(TranscriptionError::InvalidAudio(format!(
            "not a regular file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(TranscriptionError::InvalidAudio(format!(
            "file exceeds {} MB limit: {:.1} MB",
            MAX_FILE_SIZE / (1024 * 1024),
            metadata.len() as f64 / (1024.0 * 1024.0),
        )));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if mime_for_extension(&extension).is_none() {
        return Err(TranscriptionError::InvalidAudio(format!(
            "unsupported audio format: .{}",
            extension
        )));
    }

    Ok(())
}

/// MIME type for a supported extension, None for anything else.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    SUPPORTED_AUDIO_FORMATS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Supported extensions, for service info and error messages.
pub fn supported_extensions() -> Vec<&'static str> {
    SUPPORTED_AUDIO_FORMATS.iter().map(|(ext, _)| *ext).collect()
}
