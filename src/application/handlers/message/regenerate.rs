//! Regeneration coordinator.
//!
//! Before a regenerated message is persisted, the most recent AI/user pair
//! has to go. A failed AI reply is preferred over an older successful one,
//! so the regenerate affordance retries the latest failure rather than
//! re-litigating an already-successful exchange.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::Message;
use crate::domain::foundation::DomainError;
use crate::ports::MessageRepository;

/// Errors that can occur during the regeneration pre-step.
#[derive(Debug, Clone, Error)]
pub enum RegenerateError {
    /// Repository error while loading or deleting messages.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for RegenerateError {
    fn from(err: DomainError) -> Self {
        RegenerateError::RepositoryError(err.to_string())
    }
}

/// Removes the most recent AI reply and user message of a chat.
pub struct RegenerationCoordinator<M: MessageRepository> {
    message_repo: Arc<M>,
}

impl<M: MessageRepository + 'static> RegenerationCoordinator<M> {
    /// Creates a new coordinator.
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }

    /// Deletes the latest AI/user pair from a chat.
    ///
    /// Scans backwards for the last failed AI reply, falling back to the
    /// last AI reply of any kind, and independently for the last non-AI
    /// message. Either candidate may be absent; deleting a missing
    /// candidate is a no-op, not a fault. The deletions and the caller's
    /// subsequent insert are not one transaction; concurrent regenerate
    /// calls on the same chat can race (accepted limitation).
    pub async fn prepare_regenerate(&self, chat: &str) -> Result<(), RegenerateError> {
        let messages = self.message_repo.list_by_chat(chat).await?;

        let last_reply = messages
            .iter()
            .rev()
            .find(|m| m.is_failed_reply())
            .or_else(|| messages.iter().rev().find(|m| m.is_ai_reply()));
        let last_prompt = messages.iter().rev().find(|m| !m.is_ai_reply());

        if let Some(reply) = last_reply {
            self.message_repo.delete(reply).await?;
        }
        if let Some(prompt) = last_prompt {
            self.message_repo.delete(prompt).await?;
        }
        Ok(())
    }
}
