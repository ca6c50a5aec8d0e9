use async_trait::async_trait;

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
