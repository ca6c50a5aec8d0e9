use crate::application::ports::{ChatClient, ChatClientError};

pub struct MockChatClient;

#[async_trait::async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        _system_message: &str,
        _user_message: &str,
    ) -> Result<String, ChatClientError> {
        Ok("Mock minutes section".to_string())
    }
}
