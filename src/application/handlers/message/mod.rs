//! Message lifecycle handlers.
//!
//! `AddMessageHandler` is the entry point with nontrivial sequencing: it
//! runs the regeneration pre-step when requested, resolves or lazily
//! creates the chat, persists the message and then hands off to the
//! [`MessageDispatcher`]. The remaining handlers are thin wrappers over
//! the ports plus the access guard.

mod add_message;
mod delete_message;
mod dispatch;
mod get_message;
mod list_messages;
mod regenerate;
mod update_message;

pub use add_message::{AddMessageCommand, AddMessageError, AddMessageHandler, AddMessageResult};
pub use delete_message::{
    DeleteMessageCommand, DeleteMessageError, DeleteMessageHandler, DeleteWelcomeMessageCommand,
    DeleteWelcomeMessageHandler,
};
pub use dispatch::{BridgeEnvelope, DispatchError, DispatchOutcome, MessageDispatcher};
pub use get_message::{GetMessageError, GetMessageHandler};
pub use list_messages::{
    ListGlobalMessagesHandler, ListMessagesError, ListMessagesHandler, ListMessagesQuery,
};
pub use regenerate::{RegenerateError, RegenerationCoordinator};
pub use update_message::{UpdateMessageCommand, UpdateMessageError, UpdateMessageHandler};
