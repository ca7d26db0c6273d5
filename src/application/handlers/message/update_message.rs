//! UpdateMessage command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::Message;
use crate::domain::foundation::{DomainError, RecordId};
use crate::ports::{MessageRepository, NotificationGateway};

/// Command to update a message.
#[derive(Debug, Clone)]
pub struct UpdateMessageCommand {
    /// Id of the message to replace.
    pub id: RecordId,
    /// The full replacement body.
    pub message: Message,
}

/// Errors that can occur when updating a message.
#[derive(Debug, Clone, Error)]
pub enum UpdateMessageError {
    /// The notification email could not be sent; nothing was persisted.
    #[error("Failed to send notification email: {0}")]
    EmailFailed(String),

    /// Repository error during persistence.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for UpdateMessageError {
    fn from(err: DomainError) -> Self {
        UpdateMessageError::RepositoryError(err.to_string())
    }
}

/// Handler for UpdateMessage commands.
pub struct UpdateMessageHandler<M, N>
where
    M: MessageRepository,
    N: NotificationGateway,
{
    message_repo: Arc<M>,
    gateway: Arc<N>,
}

impl<M, N> UpdateMessageHandler<M, N>
where
    M: MessageRepository + 'static,
    N: NotificationGateway + 'static,
{
    /// Creates a new handler.
    pub fn new(message_repo: Arc<M>, gateway: Arc<N>) -> Self {
        Self {
            message_repo,
            gateway,
        }
    }

    /// Handles an update command.
    ///
    /// When the body requests a notification, the email goes out first and
    /// the flag is cleared before persisting, so the stored record never
    /// carries a pending notify flag. An email failure aborts the update.
    pub async fn handle(&self, cmd: UpdateMessageCommand) -> Result<bool, UpdateMessageError> {
        let mut message = cmd.message;

        if message.need_notify {
            self.gateway
                .send_email(&message)
                .await
                .map_err(|e| UpdateMessageError::EmailFailed(e.to_string()))?;
            message.need_notify = false;
        }

        Ok(self.message_repo.update(&cmd.id, &message).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryMessageRepository, RecordingNotificationGateway};
    use crate::domain::foundation::Timestamp;

    fn message(name: &str, need_notify: bool) -> Message {
        Message {
            owner: "admin".to_string(),
            name: name.to_string(),
            created_time: Timestamp::now(),
            organization: "org1".to_string(),
            user: "alice".to_string(),
            chat: "c1".to_string(),
            reply_to: String::new(),
            author: "alice".to_string(),
            text: "updated".to_string(),
            error_text: String::new(),
            is_regenerated: false,
            need_notify,
            file_name: String::new(),
            vector_scores: Vec::new(),
        }
    }

    #[tokio::test]
    async fn notify_flag_sends_email_and_is_cleared_before_persisting() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        repo.create(&message("m1", false)).await.unwrap();
        let gateway = Arc::new(RecordingNotificationGateway::new());
        let handler = UpdateMessageHandler::new(Arc::clone(&repo), Arc::clone(&gateway));

        let updated = handler
            .handle(UpdateMessageCommand {
                id: RecordId::new("admin", "m1"),
                message: message("m1", true),
            })
            .await
            .unwrap();

        assert!(updated);
        assert_eq!(gateway.emails().len(), 1);
        let stored = repo
            .get(&RecordId::new("admin", "m1"))
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.need_notify);
        assert_eq!(stored.text, "updated");
    }

    #[tokio::test]
    async fn email_failure_aborts_the_update() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let mut original = message("m1", false);
        original.text = "original".to_string();
        repo.create(&original).await.unwrap();
        let gateway = Arc::new(RecordingNotificationGateway::failing());
        let handler = UpdateMessageHandler::new(Arc::clone(&repo), gateway);

        let result = handler
            .handle(UpdateMessageCommand {
                id: RecordId::new("admin", "m1"),
                message: message("m1", true),
            })
            .await;

        assert!(matches!(result, Err(UpdateMessageError::EmailFailed(_))));
        let stored = repo
            .get(&RecordId::new("admin", "m1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.text, "original");
    }

    #[tokio::test]
    async fn plain_update_does_not_touch_the_gateway() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        repo.create(&message("m1", false)).await.unwrap();
        let gateway = Arc::new(RecordingNotificationGateway::new());
        let handler = UpdateMessageHandler::new(Arc::clone(&repo), Arc::clone(&gateway));

        let updated = handler
            .handle(UpdateMessageCommand {
                id: RecordId::new("admin", "m1"),
                message: message("m1", false),
            })
            .await
            .unwrap();

        assert!(updated);
        assert!(gateway.emails().is_empty());
    }
}
