//! Recording notification gateway.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::chat::{Chat, Message};
use crate::domain::foundation::DomainError;
use crate::ports::NotificationGateway;

/// Notification gateway that records deliveries instead of sending them.
///
/// The `failing()` variant rejects every delivery, for exercising the
/// best-effort and abort paths.
///
/// # Panics
///
/// Methods panic if an internal lock is poisoned.
pub struct RecordingNotificationGateway {
    emails: RwLock<Vec<Message>>,
    chat_payloads: RwLock<Vec<(String, String)>>,
    chat_send_attempts: AtomicUsize,
    fail: bool,
}

impl RecordingNotificationGateway {
    /// Creates a gateway that accepts every delivery.
    pub fn new() -> Self {
        Self {
            emails: RwLock::new(Vec::new()),
            chat_payloads: RwLock::new(Vec::new()),
            chat_send_attempts: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Creates a gateway that rejects every delivery.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    // === Test Helpers ===

    /// Returns all recorded emails.
    pub fn emails(&self) -> Vec<Message> {
        self.emails
            .read()
            .expect("RecordingNotificationGateway: lock poisoned")
            .clone()
    }

    /// Returns all delivered chat payloads as (chat name, payload) pairs.
    pub fn chat_payloads(&self) -> Vec<(String, String)> {
        self.chat_payloads
            .read()
            .expect("RecordingNotificationGateway: lock poisoned")
            .clone()
    }

    /// Returns how many bridge deliveries were attempted, failed or not.
    pub fn chat_send_attempts(&self) -> usize {
        self.chat_send_attempts.load(Ordering::SeqCst)
    }
}

impl Default for RecordingNotificationGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationGateway for RecordingNotificationGateway {
    async fn send_email(&self, message: &Message) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::gateway("email delivery refused"));
        }
        self.emails
            .write()
            .expect("RecordingNotificationGateway: lock poisoned")
            .push(message.clone());
        Ok(())
    }

    async fn send_to_chat(&self, chat: &Chat, payload: &str) -> Result<(), DomainError> {
        self.chat_send_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::gateway("bridge delivery refused"));
        }
        self.chat_payloads
            .write()
            .expect("RecordingNotificationGateway: lock poisoned")
            .push((chat.name.clone(), payload.to_string()));
        Ok(())
    }
}
