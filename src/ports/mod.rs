//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MessageRepository` - durable message storage, creation-ordered queries
//! - `ChatRepository` - chat storage and lazy initial-chat creation
//! - `NotificationGateway` - outbound email and IM bridge delivery

mod chat_repository;
mod message_repository;
mod notification_gateway;

pub use chat_repository::ChatRepository;
pub use message_repository::MessageRepository;
pub use notification_gateway::NotificationGateway;
