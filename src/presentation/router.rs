use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::ChatClient;
use crate::presentation::handlers::{health_handler, minutes_handler, transcribe_handler};
use crate::presentation::state::AppState;

/// Uploads above the validation ceiling still reach the size check so the
/// caller gets a JSON error rather than a bare 413.
const BODY_LIMIT: usize = 50 * 1024 * 1024;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: ChatClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/transcribe", post(transcribe_handler))
        .route("/api/minutes", post(minutes_handler::<C>))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
