//! In-memory chat repository.

use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::chat::{Chat, ChatType};
use crate::domain::foundation::{DomainError, RecordId, Timestamp};
use crate::ports::ChatRepository;

/// In-memory chat store.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct InMemoryChatRepository {
    chats: RwLock<Vec<Chat>>,
}

impl InMemoryChatRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            chats: RwLock::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Inserts a chat directly (for test setup).
    pub fn insert(&self, chat: Chat) {
        self.chats
            .write()
            .expect("InMemoryChatRepository: lock poisoned")
            .push(chat);
    }

    /// Returns the number of stored chats.
    pub fn chat_count(&self) -> usize {
        self.chats
            .read()
            .expect("InMemoryChatRepository: lock poisoned")
            .len()
    }
}

impl Default for InMemoryChatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn get(&self, id: &RecordId) -> Result<Option<Chat>, DomainError> {
        Ok(self
            .chats
            .read()
            .expect("InMemoryChatRepository: lock poisoned")
            .iter()
            .find(|c| c.owner == id.owner() && c.name == id.name())
            .cloned())
    }

    async fn create_initial(&self, organization: &str, user: &str) -> Result<Chat, DomainError> {
        let chat = Chat {
            owner: "admin".to_string(),
            name: format!("chat_{}", Uuid::new_v4().simple()),
            created_time: Timestamp::now(),
            organization: organization.to_string(),
            user: user.to_string(),
            chat_type: ChatType::Ai,
        };
        self.chats
            .write()
            .expect("InMemoryChatRepository: lock poisoned")
            .push(chat.clone());
        Ok(chat)
    }
}
