//! Command and query handlers, one per exposed operation.

pub mod message;
