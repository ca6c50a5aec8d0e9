mod transcription;

pub use transcription::{resolve, TranscriptionOverrides};
