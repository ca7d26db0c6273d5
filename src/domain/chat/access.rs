//! Access guard predicates for viewing and deleting messages.
//!
//! Callers of these predicates must translate `false` into the uniform
//! `Unauthorized` error from `DomainError::unauthorized()`, never into a
//! message that reveals which rule failed.

use crate::domain::foundation::Caller;

use super::{anonymous_fingerprint, Message};

/// Decides whether a caller may act on a message.
///
/// Rules, in order: admins are always permitted; authenticated callers are
/// permitted only for messages attributed to their own username; anonymous
/// callers are permitted only when the fingerprint of their address and
/// agent exactly matches the message's user.
pub fn can_access(caller: &Caller, message: &Message) -> bool {
    if caller.is_admin {
        return true;
    }
    if !caller.is_anonymous() {
        return caller.username == message.user;
    }
    anonymous_fingerprint(&caller.client_address, &caller.client_agent) == message.user
}

/// Decides whether a caller may delete a welcome message.
///
/// On top of [`can_access`], the target must actually be a system-seeded
/// welcome reply. This path is never permitted for arbitrary messages,
/// even when the identity matches.
pub fn can_delete_welcome(caller: &Caller, message: &Message) -> bool {
    can_access(caller, message) && message.is_welcome_reply()
}
