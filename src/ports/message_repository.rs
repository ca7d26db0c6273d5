//! Port for message persistence.

use async_trait::async_trait;

use crate::domain::chat::Message;
use crate::domain::foundation::{DomainError, RecordId};

/// Port for durable message storage.
///
/// The repository is the sole writer of persisted message state and the
/// single synchronization point between concurrent requests. A single
/// create, update or delete is atomic; no cross-record transaction is
/// offered. Every listing returns messages in creation order, ascending.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Fetches one message, or `None` when absent.
    async fn get(&self, id: &RecordId) -> Result<Option<Message>, DomainError>;

    /// Lists all global messages.
    async fn list_global(&self) -> Result<Vec<Message>, DomainError>;

    /// Lists messages attributed to a user; an empty user means no filter.
    async fn list_by_user(&self, user: &str) -> Result<Vec<Message>, DomainError>;

    /// Lists all messages of one chat.
    async fn list_by_chat(&self, chat: &str) -> Result<Vec<Message>, DomainError>;

    /// Persists a new message. Returns `false` if the write was rejected
    /// without failing, e.g. on a duplicate id.
    async fn create(&self, message: &Message) -> Result<bool, DomainError>;

    /// Replaces the message stored under `id`.
    async fn update(&self, id: &RecordId, message: &Message) -> Result<bool, DomainError>;

    /// Removes a message. Returns `false` when it was already gone.
    async fn delete(&self, message: &Message) -> Result<bool, DomainError>;
}
