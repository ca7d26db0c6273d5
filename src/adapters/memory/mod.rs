//! In-memory adapters for testing and local development.
//!
//! Synchronous, deterministic implementations of the ports. They use
//! `.expect()` on lock operations and will panic if a lock is poisoned,
//! which is acceptable for test code; production deployments back the
//! ports with a real store and gateway instead.

mod chat_repository;
mod message_repository;
mod notification_gateway;

pub use chat_repository::InMemoryChatRepository;
pub use message_repository::InMemoryMessageRepository;
pub use notification_gateway::RecordingNotificationGateway;
