//! Chatdeck - Message lifecycle engine for embedded chat.
//!
//! Implements the add/update/delete/regenerate lifecycle of chat messages,
//! dispatching new messages to an AI placeholder slot or an IM bridge, with
//! access control for authenticated, anonymous and admin callers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
