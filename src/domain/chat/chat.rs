//! Chat record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, Timestamp};

/// Kind of a chat, which decides how new messages are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChatType {
    /// New user messages get an empty AI reply slot appended.
    #[serde(rename = "AI")]
    Ai,

    /// New messages are forwarded to the IM bridge.
    Signal,

    /// No dispatch side effect.
    #[default]
    #[serde(other)]
    Plain,
}

/// A chat conversation, keyed by `(owner, name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub owner: String,
    pub name: String,

    #[serde(default)]
    pub created_time: Timestamp,

    #[serde(default)]
    pub organization: String,

    #[serde(default)]
    pub user: String,

    #[serde(rename = "type", default)]
    pub chat_type: ChatType,
}

impl Chat {
    /// Returns this chat's record id.
    pub fn id(&self) -> RecordId {
        RecordId::new(&self.owner, &self.name)
    }
}
