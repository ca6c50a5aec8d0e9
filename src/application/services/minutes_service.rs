use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError};
use crate::domain::MeetingMinutes;

const ABSTRACT_SUMMARY_PROMPT: &str = "You are a highly skilled AI trained in language comprehension and summarization. \
     Read the following meeting transcript and summarize it into a concise abstract paragraph. \
     Retain the most important points, avoid unnecessary details, and ensure clarity.";

const KEY_POINTS_PROMPT: &str = "You are an expert at distilling conversations into key points. \
     From the transcript below, extract 3-7 main discussion points that capture the essence of the meeting. \
     Present them as a numbered or bulleted list.";

const ACTION_ITEMS_PROMPT: &str = "You are an AI that identifies tasks and responsibilities from meetings. \
     Review the transcript and list all action items: who is responsible for what, and by when (if mentioned). \
     Format as a clear list with assignees and deadlines where possible.";

const SENTIMENT_PROMPT: &str = "Analyze the overall sentiment of this meeting transcript. \
     Is the tone positive, neutral, or negative? Consider collaboration, urgency, satisfaction, or frustration. \
     Provide a short paragraph with your reasoning.";

/// Turns a transcript into four-section meeting minutes with one
/// chat-completion call per section.
pub struct MinutesService<C>
where
    C: ChatClient,
{
    chat_client: Arc<C>,
}

impl<C> MinutesService<C>
where
    C: ChatClient,
{
    pub fn new(chat_client: Arc<C>) -> Self {
        Self { chat_client }
    }

    /// Fail-fast: the first failed completion aborts the remaining calls;
    /// partial minutes are never returned.
    pub async fn generate(&self, transcript: &str) -> Result<MeetingMinutes, MinutesError> {
        tracing::debug!(chars = transcript.len(), "Generating meeting minutes");

        let abstract_summary = self
            .chat_client
            .complete(ABSTRACT_SUMMARY_PROMPT, transcript)
            .await?;
        let key_points = self
            .chat_client
            .complete(KEY_POINTS_PROMPT, transcript)
            .await?;
        let action_items = self
            .chat_client
            .complete(ACTION_ITEMS_PROMPT, transcript)
            .await?;
        let sentiment = self
            .chat_client
            .complete(SENTIMENT_PROMPT, transcript)
            .await?;

        tracing::info!("Meeting minutes generated");

        Ok(MeetingMinutes {
            abstract_summary,
            key_points,
            action_items,
            sentiment,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MinutesError {
    #[error("completion failed: {0}")]
    Completion(#[from] ChatClientError),
}
