//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier, timestamp, caller and error types that form
//! the vocabulary of the message lifecycle domain.

mod caller;
mod errors;
mod ids;
mod timestamp;

pub use caller::Caller;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::RecordId;
pub use timestamp::Timestamp;
