//! Domain layer - pure types and rules, no I/O.

pub mod chat;
pub mod foundation;
