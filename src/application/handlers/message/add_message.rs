//! AddMessage command handler.
//!
//! Orchestrates the full add path: regeneration pre-step when requested,
//! chat resolution (lazy initial-chat creation or hard lookup), persisting
//! the message, and dispatching it downstream.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::{Chat, Message};
use crate::domain::foundation::{DomainError, RecordId, Timestamp};
use crate::ports::{ChatRepository, MessageRepository, NotificationGateway};

use super::dispatch::{DispatchError, DispatchOutcome, MessageDispatcher};
use super::regenerate::{RegenerateError, RegenerationCoordinator};

/// Command to add a message to a chat.
#[derive(Debug, Clone)]
pub struct AddMessageCommand {
    /// The caller-supplied message body.
    pub message: Message,
}

/// Errors that can occur when adding a message.
#[derive(Debug, Clone, Error)]
pub enum AddMessageError {
    /// The referenced chat does not exist. Nothing was persisted.
    #[error("The chat: {0} is not found")]
    ChatNotFound(String),

    /// Dispatch failed after the message itself was committed.
    #[error("Dispatch failed after message write: {0}")]
    DispatchFailure(String),

    /// Repository error during persistence.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for AddMessageError {
    fn from(err: DomainError) -> Self {
        AddMessageError::RepositoryError(err.to_string())
    }
}

impl From<RegenerateError> for AddMessageError {
    fn from(err: RegenerateError) -> Self {
        AddMessageError::RepositoryError(err.to_string())
    }
}

impl From<DispatchError> for AddMessageError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::ChatVanished(id) => AddMessageError::ChatNotFound(id.to_string()),
            other => AddMessageError::DispatchFailure(other.to_string()),
        }
    }
}

/// Result of adding a message.
#[derive(Debug, Clone)]
pub struct AddMessageResult {
    /// The chat the message landed in. For the lazy-creation path this is
    /// the freshly created chat; otherwise the authoritative re-fetched one.
    pub chat: Chat,
    /// What the dispatcher did.
    pub outcome: DispatchOutcome,
}

/// Handler for AddMessage commands.
pub struct AddMessageHandler<M, C, N>
where
    M: MessageRepository,
    C: ChatRepository,
    N: NotificationGateway,
{
    message_repo: Arc<M>,
    chat_repo: Arc<C>,
    coordinator: RegenerationCoordinator<M>,
    dispatcher: MessageDispatcher<M, C, N>,
}

impl<M, C, N> AddMessageHandler<M, C, N>
where
    M: MessageRepository + 'static,
    C: ChatRepository + 'static,
    N: NotificationGateway + 'static,
{
    /// Creates a new handler with the given dependencies.
    pub fn new(message_repo: Arc<M>, chat_repo: Arc<C>, gateway: Arc<N>) -> Self {
        let coordinator = RegenerationCoordinator::new(Arc::clone(&message_repo));
        let dispatcher = MessageDispatcher::new(
            Arc::clone(&message_repo),
            Arc::clone(&chat_repo),
            gateway,
        );
        Self {
            message_repo,
            chat_repo,
            coordinator,
            dispatcher,
        }
    }

    /// Handles an add message command, returning the chat and outcome.
    pub async fn handle(&self, cmd: AddMessageCommand) -> Result<AddMessageResult, AddMessageError> {
        let mut message = cmd.message;

        if message.is_regenerated {
            self.coordinator.prepare_regenerate(&message.chat).await?;
        }

        let chat = if message.chat.is_empty() {
            let chat = self
                .chat_repo
                .create_initial(&message.organization, &message.user)
                .await?;
            message.owner = chat.owner.clone();
            message.organization = chat.organization.clone();
            message.chat = chat.name.clone();
            chat
        } else {
            let chat_id = RecordId::new(&message.owner, &message.chat);
            self.chat_repo
                .get(&chat_id)
                .await?
                .ok_or_else(|| AddMessageError::ChatNotFound(chat_id.to_string()))?
        };

        message.created_time = Timestamp::now();

        let created = self.message_repo.create(&message).await?;
        if !created {
            // No write happened; dispatching would break the
            // write-then-dispatch ordering guarantee.
            return Ok(AddMessageResult {
                chat,
                outcome: DispatchOutcome::Skipped,
            });
        }

        let (chat, outcome) = self.dispatcher.dispatch(&message).await?;
        Ok(AddMessageResult { chat, outcome })
    }
}
