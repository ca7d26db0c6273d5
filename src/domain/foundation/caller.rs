//! Caller identity snapshot for a single request.
//!
//! Populated by the transport layer (session lookup, client headers) before
//! a handler runs. The domain never touches session storage itself; any
//! auth mechanism can fill this struct in.

/// Identity of the caller of one operation.
///
/// An empty `username` means the caller is anonymous; anonymous callers are
/// identified by a fingerprint derived from their network address and agent
/// string (see `domain::chat::anonymous_fingerprint`).
#[derive(Debug, Clone, Default)]
pub struct Caller {
    /// Session username, empty for anonymous callers.
    pub username: String,

    /// Whether the caller holds admin rights.
    pub is_admin: bool,

    /// Client network address as reported by the transport.
    pub client_address: String,

    /// Client-reported agent string.
    pub client_agent: String,
}

impl Caller {
    /// Creates an authenticated, non-admin caller.
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Creates an admin caller.
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_admin: true,
            ..Self::default()
        }
    }

    /// Creates an anonymous caller identified only by address and agent.
    pub fn anonymous(address: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            client_address: address.into(),
            client_agent: agent.into(),
            ..Self::default()
        }
    }

    /// Returns true when the caller has no session.
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_caller_is_not_anonymous() {
        let caller = Caller::authenticated("alice");
        assert!(!caller.is_anonymous());
        assert!(!caller.is_admin);
    }

    #[test]
    fn anonymous_caller_has_empty_username() {
        let caller = Caller::anonymous("203.0.113.9", "Mozilla/5.0");
        assert!(caller.is_anonymous());
        assert_eq!(caller.client_address, "203.0.113.9");
    }
}
