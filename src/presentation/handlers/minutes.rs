use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::ChatClient;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct MinutesRequest {
    pub transcript: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate structured minutes from a transcript. Expects JSON
/// `{ "transcript": ... }` and returns the four-section minutes.
#[tracing::instrument(skip(state, request))]
pub async fn minutes_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<MinutesRequest>,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
{
    let transcript = request.transcript.unwrap_or_default();
    if transcript.trim().is_empty() {
        tracing::warn!("Minutes request with missing transcript");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "missing transcript".to_string(),
            }),
        )
            .into_response();
    }

    match state.minutes_service.generate(&transcript).await {
        Ok(minutes) => (StatusCode::OK, Json(minutes)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Minutes generation failed");
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
