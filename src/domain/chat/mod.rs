//! Chat domain - messages, chats and the access rules over them.

pub mod access;
mod chat;
mod fingerprint;
mod message;

pub use chat::{Chat, ChatType};
pub use fingerprint::anonymous_fingerprint;
pub use message::{Message, VectorScore, AI_AUTHOR, WELCOME_REPLY};
