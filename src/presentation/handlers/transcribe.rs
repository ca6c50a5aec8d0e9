use std::path::Path;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::TranscriptionError;
use crate::application::services::TranscriptionManager;
use crate::infrastructure::audio::validation::validate_audio_file;
use crate::infrastructure::audio::TranscriptionProviderFactory;
use crate::presentation::config::{self, TranscriptionOverrides};

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a multipart file upload (field `file`) and returns its
/// transcription. Settings are resolved fresh from the environment for
/// each request.
#[tracing::instrument(skip(multipart))]
pub async fn transcribe_handler(mut multipart: Multipart) -> impl IntoResponse {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Transcribe request with no file field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "missing file field".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let file_name = field.file_name().unwrap_or_default().to_string();
    if file_name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "empty filename".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %file_name, bytes = data.len(), "File upload received");

    let suffix = Path::new(&file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_else(|| ".wav".to_string());

    // Scratch file for the upload; dropped (and deleted) on every exit
    // path out of this handler.
    let scratch = match tempfile::Builder::new()
        .prefix("minutemaker-upload-")
        .suffix(&suffix)
        .tempfile()
    {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create scratch file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to store upload: {}", e),
                }),
            )
                .into_response();
        }
    };
    if let Err(e) = tokio::fs::write(scratch.path(), &data).await {
        tracing::error!(error = %e, "Failed to write scratch file");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("failed to store upload: {}", e),
            }),
        )
            .into_response();
    }

    // Input validation happens before any provider is constructed; an
    // invalid upload never triggers a network call or a model load.
    if let Err(e) = validate_audio_file(scratch.path()) {
        tracing::warn!(error = %e, filename = %file_name, "Rejected audio upload");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    let settings = config::resolve(&TranscriptionOverrides::default());
    let provider = match TranscriptionProviderFactory::create(&settings) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "Provider construction failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let manager = TranscriptionManager::new(provider, settings);
    match manager.transcribe_file(scratch.path(), None).await {
        Ok(result) => (StatusCode::OK, Json(TranscribeResponse { text: result.text })).into_response(),
        Err(e @ TranscriptionError::InvalidAudio(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, filename = %file_name, "Transcription request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
