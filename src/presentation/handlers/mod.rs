mod health;
mod minutes;
mod transcribe;

pub use health::health_handler;
pub use minutes::minutes_handler;
pub use transcribe::transcribe_handler;
