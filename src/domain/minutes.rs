use serde::{Deserialize, Serialize};

/// Structured meeting minutes: exactly four prose sections, one per
/// summarization prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingMinutes {
    pub abstract_summary: String,
    pub key_points: String,
    pub action_items: String,
    pub sentiment: String,
}

impl MeetingMinutes {
    /// Section identifiers and bodies in presentation order.
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("abstract_summary", self.abstract_summary.as_str()),
            ("key_points", self.key_points.as_str()),
            ("action_items", self.action_items.as_str()),
            ("sentiment", self.sentiment.as_str()),
        ]
    }
}
