//! Message dispatcher.
//!
//! Decides what happens after a new message has been durably persisted:
//! create an AI placeholder reply, forward to the IM bridge, or nothing.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::chat::{Chat, ChatType, Message};
use crate::domain::foundation::{DomainError, RecordId};
use crate::ports::{ChatRepository, MessageRepository, NotificationGateway};

/// What the dispatcher did for one message.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The chat type requires no side effect.
    Skipped,
    /// An empty AI reply slot was persisted.
    PlaceholderCreated(Message),
    /// The message was handed to the IM bridge (best-effort).
    Forwarded,
}

impl DispatchOutcome {
    /// Returns true when an AI placeholder was created.
    pub fn created_placeholder(&self) -> bool {
        matches!(self, DispatchOutcome::PlaceholderCreated(_))
    }
}

/// Errors that can occur while dispatching a persisted message.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The chat vanished between the message write and the re-fetch.
    /// This is a fatal inconsistency, not a soft miss.
    #[error("The chat: {0} is not found")]
    ChatVanished(RecordId),

    /// The AI placeholder reply could not be persisted. The triggering
    /// message stays committed; nothing is rolled back.
    #[error("Failed to create placeholder reply: {0}")]
    PlaceholderFailed(String),

    /// Repository error during dispatch.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for DispatchError {
    fn from(err: DomainError) -> Self {
        DispatchError::RepositoryError(err.to_string())
    }
}

/// Envelope handed to the IM bridge for Signal-type chats.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeEnvelope {
    pub body: Message,
}

/// Dispatches a just-persisted message to its downstream consumer.
///
/// Invoked exactly once per message, strictly after the triggering write
/// reported success. The gateway is an injected dependency, never ambient
/// process state.
pub struct MessageDispatcher<M, C, N>
where
    M: MessageRepository,
    C: ChatRepository,
    N: NotificationGateway,
{
    message_repo: Arc<M>,
    chat_repo: Arc<C>,
    gateway: Arc<N>,
}

impl<M, C, N> MessageDispatcher<M, C, N>
where
    M: MessageRepository + 'static,
    C: ChatRepository + 'static,
    N: NotificationGateway + 'static,
{
    /// Creates a new dispatcher with the given dependencies.
    pub fn new(message_repo: Arc<M>, chat_repo: Arc<C>, gateway: Arc<N>) -> Self {
        Self {
            message_repo,
            chat_repo,
            gateway,
        }
    }

    /// Dispatches one persisted message.
    ///
    /// Re-fetches the chat by derived id for authoritative state, since the
    /// message's chat id may have just been assigned. Returns the fetched
    /// chat together with the outcome.
    pub async fn dispatch(
        &self,
        message: &Message,
    ) -> Result<(Chat, DispatchOutcome), DispatchError> {
        let chat_id = RecordId::new(&message.owner, &message.chat);
        let chat = self
            .chat_repo
            .get(&chat_id)
            .await?
            .ok_or_else(|| DispatchError::ChatVanished(chat_id.clone()))?;

        match chat.chat_type {
            ChatType::Ai => {
                let placeholder = Message::ai_placeholder(message);
                let created = self
                    .message_repo
                    .create(&placeholder)
                    .await
                    .map_err(|e| DispatchError::PlaceholderFailed(e.to_string()))?;
                if !created {
                    return Err(DispatchError::PlaceholderFailed(
                        "placeholder write was rejected".to_string(),
                    ));
                }
                debug!(chat = %chat.name, reply_to = %message.name, "created AI placeholder reply");
                Ok((chat, DispatchOutcome::PlaceholderCreated(placeholder)))
            }
            ChatType::Signal => {
                // Message durability takes priority over bridge delivery:
                // a transport failure is logged, never surfaced.
                let envelope = BridgeEnvelope {
                    body: message.clone(),
                };
                match serde_json::to_string(&envelope) {
                    Ok(payload) => {
                        if let Err(err) = self.gateway.send_to_chat(&chat, &payload).await {
                            warn!(chat = %chat.name, error = %err, "IM bridge delivery failed");
                        }
                    }
                    Err(err) => {
                        warn!(chat = %chat.name, error = %err, "could not serialize bridge envelope");
                    }
                }
                Ok((chat, DispatchOutcome::Forwarded))
            }
            ChatType::Plain => Ok((chat, DispatchOutcome::Skipped)),
        }
    }
}
