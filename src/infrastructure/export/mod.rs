mod minutes_document;

pub use minutes_document::{render_minutes, save_minutes, ExportError};
