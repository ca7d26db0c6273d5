//! Message listing query handlers.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::Message;
use crate::domain::foundation::{Caller, DomainError};
use crate::ports::MessageRepository;

/// Errors that can occur while listing messages.
#[derive(Debug, Clone, Error)]
pub enum ListMessagesError {
    /// A non-admin tried to view another user's messages.
    #[error("You can only view your own messages")]
    NotOwnMessages,

    /// Repository error during the query.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DomainError> for ListMessagesError {
    fn from(err: DomainError) -> Self {
        ListMessagesError::RepositoryError(err.to_string())
    }
}

/// Handler returning all global messages.
pub struct ListGlobalMessagesHandler<M: MessageRepository> {
    message_repo: Arc<M>,
}

impl<M: MessageRepository + 'static> ListGlobalMessagesHandler<M> {
    /// Creates a new handler.
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }

    /// Returns all global messages in creation order.
    pub async fn handle(&self) -> Result<Vec<Message>, ListMessagesError> {
        Ok(self.message_repo.list_global().await?)
    }
}

/// Query for listing messages by user or chat.
#[derive(Debug, Clone)]
pub struct ListMessagesQuery {
    pub caller: Caller,
    /// User filter as supplied by the caller.
    pub user: String,
    /// Chat filter; empty lists by user instead.
    pub chat: String,
    /// Admin-only override of the user filter. The literal `"null"` is
    /// treated as absent (clients serialize it that way).
    pub selected_user: String,
}

/// Handler for listing messages, restricted to self-or-admin.
pub struct ListMessagesHandler<M: MessageRepository> {
    message_repo: Arc<M>,
}

impl<M: MessageRepository + 'static> ListMessagesHandler<M> {
    /// Creates a new handler.
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }

    /// Handles a list messages query.
    ///
    /// Admins start with an unrestricted user filter and may narrow it via
    /// `selected_user`; non-admins are rejected when asking for anyone but
    /// themselves.
    pub async fn handle(&self, query: ListMessagesQuery) -> Result<Vec<Message>, ListMessagesError> {
        let mut user = query.user;

        if query.caller.is_admin {
            user.clear();
        }

        let selected = query.selected_user;
        let selected_present = !selected.is_empty() && selected != "null";

        if selected_present && query.caller.is_admin {
            user = selected.clone();
        }

        if !query.caller.is_admin && !selected.is_empty() && user != selected {
            return Err(ListMessagesError::NotOwnMessages);
        }

        if query.chat.is_empty() {
            Ok(self.message_repo.list_by_user(&user).await?)
        } else {
            Ok(self.message_repo.list_by_chat(&query.chat).await?)
        }
    }
}
