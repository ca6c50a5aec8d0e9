mod chat_client;
mod transcription_provider;

pub use chat_client::{ChatClient, ChatClientError};
pub use transcription_provider::{ProviderTranscript, TranscriptionError, TranscriptionProvider};
