//! GetMessage query handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::Message;
use crate::domain::foundation::{DomainError, RecordId};
use crate::ports::MessageRepository;

/// Errors that can occur when fetching a message.
#[derive(Debug, Clone, Error)]
pub enum GetMessageError {
    #[error("Message not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for GetMessageError {
    fn from(err: DomainError) -> Self {
        GetMessageError::RepositoryError(err.to_string())
    }
}

/// Handler fetching a single message by id.
pub struct GetMessageHandler<M: MessageRepository> {
    message_repo: Arc<M>,
}

impl<M: MessageRepository + 'static> GetMessageHandler<M> {
    /// Creates a new handler.
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }

    /// Fetches one message.
    pub async fn handle(&self, id: &RecordId) -> Result<Message, GetMessageError> {
        self.message_repo
            .get(id)
            .await?
            .ok_or_else(|| GetMessageError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMessageRepository;
    use crate::domain::foundation::Timestamp;

    fn message(name: &str) -> Message {
        Message {
            owner: "admin".to_string(),
            name: name.to_string(),
            created_time: Timestamp::now(),
            organization: "org1".to_string(),
            user: "alice".to_string(),
            chat: "c1".to_string(),
            reply_to: String::new(),
            author: "alice".to_string(),
            text: "hi".to_string(),
            error_text: String::new(),
            is_regenerated: false,
            need_notify: false,
            file_name: String::new(),
            vector_scores: Vec::new(),
        }
    }

    #[tokio::test]
    async fn returns_the_stored_message() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        repo.create(&message("m1")).await.unwrap();
        let handler = GetMessageHandler::new(Arc::clone(&repo));

        let found = handler
            .handle(&RecordId::new("admin", "m1"))
            .await
            .unwrap();

        assert_eq!(found.text, "hi");
    }

    #[tokio::test]
    async fn absent_message_is_not_found() {
        let handler = GetMessageHandler::new(Arc::new(InMemoryMessageRepository::new()));

        let result = handler.handle(&RecordId::new("admin", "missing")).await;

        assert!(matches!(result, Err(GetMessageError::NotFound(_))));
    }
}
