//! Port for chat persistence.

use async_trait::async_trait;

use crate::domain::chat::Chat;
use crate::domain::foundation::{DomainError, RecordId};

/// Port for chat storage.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Fetches one chat, or `None` when absent.
    async fn get(&self, id: &RecordId) -> Result<Option<Chat>, DomainError>;

    /// Creates the initial chat for a caller who supplied no chat id.
    ///
    /// Implementations create an AI-type chat for the given organization
    /// and user and return it; callers take the chat id from the result.
    async fn create_initial(&self, organization: &str, user: &str) -> Result<Chat, DomainError>;
}
