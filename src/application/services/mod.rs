mod minutes_service;
mod transcription_manager;

pub use minutes_service::{MinutesError, MinutesService};
pub use transcription_manager::{ProgressFn, TranscriptionManager};
