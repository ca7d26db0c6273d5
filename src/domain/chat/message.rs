//! Message record and the AI placeholder constructor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{RecordId, Timestamp};

/// Sentinel author value for AI-generated replies.
pub const AI_AUTHOR: &str = "AI";

/// Sentinel `reply_to` value for system-seeded welcome messages.
pub const WELCOME_REPLY: &str = "Welcome";

/// Relevance score attached to a message by the retrieval step.
///
/// Carried through unchanged; the lifecycle layer never computes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorScore {
    pub vector: String,
    pub score: f32,
}

/// A chat message, keyed by `(owner, name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub owner: String,
    pub name: String,

    #[serde(default)]
    pub created_time: Timestamp,

    #[serde(default)]
    pub organization: String,

    /// User id the message is attributed to. For anonymous widget users this
    /// is a derived `"u-"` fingerprint identity.
    #[serde(default)]
    pub user: String,

    /// Name of the chat this message belongs to.
    #[serde(default)]
    pub chat: String,

    /// Name of the message this one answers, or [`WELCOME_REPLY`].
    #[serde(default)]
    pub reply_to: String,

    /// Authoring identity: a user identifier or the [`AI_AUTHOR`] sentinel.
    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub text: String,

    /// Non-empty when an AI generation attempt for this slot failed.
    #[serde(default)]
    pub error_text: String,

    /// Transient request flag: discard and redo the latest exchange first.
    #[serde(default)]
    pub is_regenerated: bool,

    /// Transient request flag: send a notification email on update.
    #[serde(default)]
    pub need_notify: bool,

    #[serde(default)]
    pub file_name: String,

    #[serde(default)]
    pub vector_scores: Vec<VectorScore>,
}

impl Message {
    /// Returns this message's record id.
    pub fn id(&self) -> RecordId {
        RecordId::new(&self.owner, &self.name)
    }

    /// Returns true for AI-authored replies.
    pub fn is_ai_reply(&self) -> bool {
        self.author == AI_AUTHOR
    }

    /// Returns true for AI replies whose generation attempt failed.
    pub fn is_failed_reply(&self) -> bool {
        self.is_ai_reply() && !self.error_text.is_empty()
    }

    /// Returns true for system-seeded welcome replies.
    pub fn is_welcome_reply(&self) -> bool {
        self.is_ai_reply() && self.reply_to == WELCOME_REPLY
    }

    /// Builds the empty AI reply slot for a just-persisted user message.
    ///
    /// The placeholder inherits owner, organization, user, chat and file
    /// name from the trigger, answers it by name, and takes a creation time
    /// derived from the trigger so it sorts strictly later.
    pub fn ai_placeholder(trigger: &Message) -> Self {
        Self {
            owner: trigger.owner.clone(),
            name: generated_name(),
            created_time: trigger.created_time.successor(),
            organization: trigger.organization.clone(),
            user: trigger.user.clone(),
            chat: trigger.chat.clone(),
            reply_to: trigger.name.clone(),
            author: AI_AUTHOR.to_string(),
            text: String::new(),
            error_text: String::new(),
            is_regenerated: false,
            need_notify: false,
            file_name: trigger.file_name.clone(),
            vector_scores: Vec::new(),
        }
    }
}

/// Generates a fresh unique message name.
fn generated_name() -> String {
    format!("message_{}", Uuid::new_v4().simple())
}
