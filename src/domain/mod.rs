mod minutes;
mod settings;
mod transcript;

pub use minutes::MeetingMinutes;
pub use settings::{TranscriptionSettings, VALID_LOCAL_MODELS};
pub use transcript::{TranscriptSegment, TranscriptionResult};
