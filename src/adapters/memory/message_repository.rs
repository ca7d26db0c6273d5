//! In-memory message repository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::chat::Message;
use crate::domain::foundation::{DomainError, RecordId};
use crate::ports::MessageRepository;

/// In-memory message store.
///
/// Records are kept in insertion order, which here is creation order, so
/// listings satisfy the port's creation-order contract without re-sorting.
/// A database-backed implementation would order by `created_time` instead.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct InMemoryMessageRepository {
    records: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Returns all messages of a chat in creation order (for assertions).
    pub fn messages_in(&self, chat: &str) -> Vec<Message> {
        self.filtered(|m| m.chat == chat)
    }

    fn filtered(&self, filter: impl Fn(&Message) -> bool) -> Vec<Message> {
        self.records
            .read()
            .expect("InMemoryMessageRepository: lock poisoned")
            .iter()
            .filter(|m| filter(m))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn get(&self, id: &RecordId) -> Result<Option<Message>, DomainError> {
        Ok(self
            .records
            .read()
            .expect("InMemoryMessageRepository: lock poisoned")
            .iter()
            .find(|m| m.owner == id.owner() && m.name == id.name())
            .cloned())
    }

    async fn list_global(&self) -> Result<Vec<Message>, DomainError> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_user(&self, user: &str) -> Result<Vec<Message>, DomainError> {
        if user.is_empty() {
            return Ok(self.filtered(|_| true));
        }
        Ok(self.filtered(|m| m.user == user))
    }

    async fn list_by_chat(&self, chat: &str) -> Result<Vec<Message>, DomainError> {
        Ok(self.filtered(|m| m.chat == chat))
    }

    async fn create(&self, message: &Message) -> Result<bool, DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryMessageRepository: lock poisoned");
        if records
            .iter()
            .any(|m| m.owner == message.owner && m.name == message.name)
        {
            return Ok(false);
        }
        records.push(message.clone());
        Ok(true)
    }

    async fn update(&self, id: &RecordId, message: &Message) -> Result<bool, DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryMessageRepository: lock poisoned");
        match records
            .iter_mut()
            .find(|m| m.owner == id.owner() && m.name == id.name())
        {
            Some(slot) => {
                *slot = message.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, message: &Message) -> Result<bool, DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryMessageRepository: lock poisoned");
        let before = records.len();
        records.retain(|m| !(m.owner == message.owner && m.name == message.name));
        Ok(records.len() < before)
    }
}
