//! Port for outbound notifications.

use async_trait::async_trait;

use crate::domain::chat::{Chat, Message};
use crate::domain::foundation::DomainError;

/// Port for delivering notifications to external channels.
///
/// Deliveries are at-most-once from this layer's point of view: the caller
/// never retries, and a failure after the primary entity is committed must
/// not roll anything back. Retry policy, if any, belongs to the adapter.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Sends a notification email about a message.
    async fn send_email(&self, message: &Message) -> Result<(), DomainError>;

    /// Hands a serialized message envelope to the IM bridge for a chat.
    async fn send_to_chat(&self, chat: &Chat, payload: &str) -> Result<(), DomainError>;
}
