use std::io::Write;

use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use minutemaker::application::ports::{TranscriptionError, TranscriptionProvider};
use minutemaker::infrastructure::audio::{HttpWhisperEngine, OpenAiWhisperEngine};
use minutemaker::presentation::config::{resolve, TranscriptionOverrides};

async fn start_mock_server(
    path: &'static str,
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        path,
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn sample_audio_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".wav")
        .tempfile()
        .unwrap();
    file.write_all(b"fake wav audio data").unwrap();
    file
}

fn third_party_engine(base_url: &str) -> HttpWhisperEngine {
    let overrides = TranscriptionOverrides {
        provider: Some("whisper_api".to_string()),
        api_base_url: Some(base_url.to_string()),
        api_key: Some("test-key".to_string()),
        ..Default::default()
    };
    HttpWhisperEngine::new(&resolve(&overrides)).unwrap()
}

#[tokio::test]
async fn given_verbose_response_when_openai_engine_transcribes_then_fields_are_mapped() {
    let body = r#"{
        "text": "Hello from the meeting",
        "language": "en",
        "duration": 4.2,
        "segments": [
            {"start": 0.0, "end": 2.0, "text": "Hello from"},
            {"start": 2.0, "end": 4.2, "text": "the meeting"}
        ]
    }"#;
    let (base_url, shutdown_tx) = start_mock_server("/audio/transcriptions", 200, body).await;
    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url));
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await.unwrap();

    assert_eq!(result.text, "Hello from the meeting");
    assert_eq!(result.language.as_deref(), Some("en"));
    assert_eq!(result.duration, Some(4.2));
    assert_eq!(result.segments.len(), 2);
    assert_eq!(result.segments[1].text, "the meeting");
    assert_eq!(result.source, "openai_api");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_openai_engine_transcribes_then_api_error_is_returned() {
    let body = r#"{"error": {"message": "invalid file"}}"#;
    let (base_url, shutdown_tx) = start_mock_server("/audio/transcriptions", 400, body).await;
    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url));
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_openai_engine_when_listing_models_then_single_fixed_name() {
    let engine = OpenAiWhisperEngine::new("test-key".to_string(), None);

    assert_eq!(engine.available_models(), vec!["whisper-1"]);
}

#[tokio::test]
async fn given_transcript_key_without_text_when_third_party_transcribes_then_text_is_read() {
    let body = r#"{"transcript": "hello", "segments": []}"#;
    let (base_url, shutdown_tx) = start_mock_server("/v1/transcriptions", 200, body).await;
    let engine = third_party_engine(&base_url);
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await.unwrap();

    assert_eq!(result.text, "hello");
    assert!(result.segments.is_empty());
    assert_eq!(result.source, "third_party_api");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_result_key_only_when_third_party_transcribes_then_text_is_read() {
    let body = r#"{"result": "fallback transcript"}"#;
    let (base_url, shutdown_tx) = start_mock_server("/v1/transcriptions", 200, body).await;
    let engine = third_party_engine(&base_url);
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await.unwrap();

    assert_eq!(result.text, "fallback transcript");
    assert!(result.segments.is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_text_key_present_when_third_party_transcribes_then_text_wins_over_alternates() {
    let body = r#"{"text": "primary", "transcript": "secondary", "result": "tertiary"}"#;
    let (base_url, shutdown_tx) = start_mock_server("/v1/transcriptions", 200, body).await;
    let engine = third_party_engine(&base_url);
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await.unwrap();

    assert_eq!(result.text, "primary");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_language_when_third_party_transcribes_then_requested_language_is_kept(
) {
    let body = r#"{"text": "hola"}"#;
    let (base_url, shutdown_tx) = start_mock_server("/v1/transcriptions", 200, body).await;
    let engine = third_party_engine(&base_url);
    let audio = sample_audio_file();

    let result = engine
        .transcribe(audio.path(), Some("es"), None)
        .await
        .unwrap();

    assert_eq!(result.language.as_deref(), Some("es"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_segments_with_timing_when_third_party_transcribes_then_segments_are_parsed() {
    let body = r#"{
        "text": "two segments",
        "segments": [
            {"start": 0.0, "end": 1.5, "text": "two"},
            {"start": 1.5, "end": 3.0, "text": "segments"}
        ]
    }"#;
    let (base_url, shutdown_tx) = start_mock_server("/v1/transcriptions", 200, body).await;
    let engine = third_party_engine(&base_url);
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await.unwrap();

    assert_eq!(result.segments.len(), 2);
    assert_eq!(result.segments[0].start, 0.0);
    assert_eq!(result.segments[1].end, 3.0);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_third_party_transcribes_then_api_error_is_returned() {
    let body = r#"{"error": "quota exceeded"}"#;
    let (base_url, shutdown_tx) = start_mock_server("/v1/transcriptions", 429, body).await;
    let engine = third_party_engine(&base_url);
    let audio = sample_audio_file();

    let result = engine.transcribe(audio.path(), None, None).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}
