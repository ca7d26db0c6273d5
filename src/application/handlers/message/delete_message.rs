//! Message deletion handlers.
//!
//! Hard deletion is admin-only. The separate welcome-message path lets a
//! widget user, anonymous or not, remove the system-seeded AI greeting of
//! their own chat and nothing else.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::{access, Message};
use crate::domain::foundation::{Caller, DomainError, RecordId};
use crate::ports::MessageRepository;

/// Errors that can occur when deleting a message.
#[derive(Debug, Clone, Error)]
pub enum DeleteMessageError {
    /// Uniform denial; deliberately does not say which rule failed.
    #[error("No permission")]
    Unauthorized,

    #[error("Message not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for DeleteMessageError {
    fn from(err: DomainError) -> Self {
        DeleteMessageError::RepositoryError(err.to_string())
    }
}

/// Command to hard-delete a message.
#[derive(Debug, Clone)]
pub struct DeleteMessageCommand {
    pub caller: Caller,
    pub message: Message,
}

/// Handler for admin-only hard deletion.
pub struct DeleteMessageHandler<M: MessageRepository> {
    message_repo: Arc<M>,
}

impl<M: MessageRepository + 'static> DeleteMessageHandler<M> {
    /// Creates a new handler.
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }

    /// Handles a delete command. Admin only.
    pub async fn handle(&self, cmd: DeleteMessageCommand) -> Result<bool, DeleteMessageError> {
        if !cmd.caller.is_admin {
            return Err(DeleteMessageError::Unauthorized);
        }
        Ok(self.message_repo.delete(&cmd.message).await?)
    }
}

/// Command to delete a welcome message.
#[derive(Debug, Clone)]
pub struct DeleteWelcomeMessageCommand {
    pub caller: Caller,
    /// Owner of the target message, as supplied in the body.
    pub owner: String,
    /// Name of the target message, as supplied in the body.
    pub name: String,
}

/// Handler for the conditional welcome-message deletion path.
pub struct DeleteWelcomeMessageHandler<M: MessageRepository> {
    message_repo: Arc<M>,
}

impl<M: MessageRepository + 'static> DeleteWelcomeMessageHandler<M> {
    /// Creates a new handler.
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }

    /// Handles a welcome-deletion command.
    ///
    /// The target is re-fetched by id rather than trusted from the body,
    /// then checked against the access guard's welcome rules.
    pub async fn handle(
        &self,
        cmd: DeleteWelcomeMessageCommand,
    ) -> Result<bool, DeleteMessageError> {
        let id = RecordId::new(&cmd.owner, &cmd.name);
        let message = self
            .message_repo
            .get(&id)
            .await?
            .ok_or_else(|| DeleteMessageError::NotFound(id.to_string()))?;

        if !access::can_delete_welcome(&cmd.caller, &message) {
            return Err(DeleteMessageError::Unauthorized);
        }

        Ok(self.message_repo.delete(&message).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMessageRepository;
    use crate::domain::chat::{anonymous_fingerprint, AI_AUTHOR, WELCOME_REPLY};
    use crate::domain::foundation::Timestamp;

    fn message(name: &str, user: &str, author: &str, reply_to: &str) -> Message {
        Message {
            owner: "admin".to_string(),
            name: name.to_string(),
            created_time: Timestamp::now(),
            organization: "org1".to_string(),
            user: user.to_string(),
            chat: "c1".to_string(),
            reply_to: reply_to.to_string(),
            author: author.to_string(),
            text: "hello".to_string(),
            error_text: String::new(),
            is_regenerated: false,
            need_notify: false,
            file_name: String::new(),
            vector_scores: Vec::new(),
        }
    }

    fn welcome_message(name: &str, user: &str) -> Message {
        message(name, user, AI_AUTHOR, WELCOME_REPLY)
    }

    mod hard_delete {
        use super::*;

        #[tokio::test]
        async fn admin_may_delete_any_message() {
            let repo = Arc::new(InMemoryMessageRepository::new());
            let target = message("m1", "alice", "alice", "");
            repo.create(&target).await.unwrap();
            let handler = DeleteMessageHandler::new(Arc::clone(&repo));

            let deleted = handler
                .handle(DeleteMessageCommand {
                    caller: Caller::admin("root"),
                    message: target,
                })
                .await
                .unwrap();

            assert!(deleted);
            assert!(repo.messages_in("c1").is_empty());
        }

        #[tokio::test]
        async fn non_admin_is_denied() {
            let repo = Arc::new(InMemoryMessageRepository::new());
            let target = message("m1", "alice", "alice", "");
            repo.create(&target).await.unwrap();
            let handler = DeleteMessageHandler::new(Arc::clone(&repo));

            let result = handler
                .handle(DeleteMessageCommand {
                    caller: Caller::authenticated("alice"),
                    message: target,
                })
                .await;

            assert!(matches!(result, Err(DeleteMessageError::Unauthorized)));
            assert_eq!(repo.messages_in("c1").len(), 1);
        }
    }

    mod welcome_delete {
        use super::*;

        fn command(caller: Caller, name: &str) -> DeleteWelcomeMessageCommand {
            DeleteWelcomeMessageCommand {
                caller,
                owner: "admin".to_string(),
                name: name.to_string(),
            }
        }

        #[tokio::test]
        async fn owner_may_delete_their_welcome_message() {
            let repo = Arc::new(InMemoryMessageRepository::new());
            repo.create(&welcome_message("m1", "alice")).await.unwrap();
            let handler = DeleteWelcomeMessageHandler::new(Arc::clone(&repo));

            let deleted = handler
                .handle(command(Caller::authenticated("alice"), "m1"))
                .await
                .unwrap();

            assert!(deleted);
        }

        #[tokio::test]
        async fn anonymous_caller_matches_by_fingerprint() {
            let identity = anonymous_fingerprint("203.0.113.9", "Mozilla/5.0");
            let repo = Arc::new(InMemoryMessageRepository::new());
            repo.create(&welcome_message("m1", &identity)).await.unwrap();
            let handler = DeleteWelcomeMessageHandler::new(Arc::clone(&repo));

            let deleted = handler
                .handle(command(
                    Caller::anonymous("203.0.113.9", "Mozilla/5.0"),
                    "m1",
                ))
                .await
                .unwrap();

            assert!(deleted);
        }

        #[tokio::test]
        async fn fingerprint_mismatch_is_denied() {
            let identity = anonymous_fingerprint("203.0.113.9", "Mozilla/5.0");
            let repo = Arc::new(InMemoryMessageRepository::new());
            repo.create(&welcome_message("m1", &identity)).await.unwrap();
            let handler = DeleteWelcomeMessageHandler::new(Arc::clone(&repo));

            let result = handler
                .handle(command(
                    Caller::anonymous("203.0.113.9", "Different/1.0"),
                    "m1",
                ))
                .await;

            assert!(matches!(result, Err(DeleteMessageError::Unauthorized)));
        }

        #[tokio::test]
        async fn user_authored_message_is_always_denied() {
            // Identity matches, but the target is not an AI welcome reply.
            let repo = Arc::new(InMemoryMessageRepository::new());
            repo.create(&message("m1", "alice", "alice", WELCOME_REPLY))
                .await
                .unwrap();
            let handler = DeleteWelcomeMessageHandler::new(Arc::clone(&repo));

            let result = handler
                .handle(command(Caller::authenticated("alice"), "m1"))
                .await;

            assert!(matches!(result, Err(DeleteMessageError::Unauthorized)));
            assert_eq!(repo.messages_in("c1").len(), 1);
        }

        #[tokio::test]
        async fn ordinary_ai_reply_is_denied() {
            let repo = Arc::new(InMemoryMessageRepository::new());
            repo.create(&message("m1", "alice", AI_AUTHOR, "message_0"))
                .await
                .unwrap();
            let handler = DeleteWelcomeMessageHandler::new(Arc::clone(&repo));

            let result = handler
                .handle(command(Caller::authenticated("alice"), "m1"))
                .await;

            assert!(matches!(result, Err(DeleteMessageError::Unauthorized)));
        }

        #[tokio::test]
        async fn missing_target_is_not_found() {
            let handler =
                DeleteWelcomeMessageHandler::new(Arc::new(InMemoryMessageRepository::new()));

            let result = handler
                .handle(command(Caller::authenticated("alice"), "missing"))
                .await;

            assert!(matches!(result, Err(DeleteMessageError::NotFound(_))));
        }
    }
}
