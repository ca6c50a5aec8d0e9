use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use minutemaker::application::services::MinutesService;
use minutemaker::infrastructure::llm::OpenRouterClient;
use minutemaker::infrastructure::observability::{init_tracing, TracingConfig};
use minutemaker::presentation::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    init_tracing(TracingConfig::default(), port);

    let chat_client = Arc::new(OpenRouterClient::from_env());
    let minutes_service = Arc::new(MinutesService::new(chat_client));

    let state = AppState { minutes_service };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
