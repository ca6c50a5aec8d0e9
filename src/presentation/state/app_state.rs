use std::sync::Arc;

use crate::application::ports::ChatClient;
use crate::application::services::MinutesService;

pub struct AppState<C>
where
    C: ChatClient,
{
    pub minutes_service: Arc<MinutesService<C>>,
}

impl<C> Clone for AppState<C>
where
    C: ChatClient,
{
    fn clone(&self) -> Self {
        Self {
            minutes_service: Arc::clone(&self.minutes_service),
        }
    }
}
