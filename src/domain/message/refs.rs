//! Read-side relationship views.
//!
//! Messages store their foreign references as bare identifiers. On read, the
//! store attaches these lightweight projections so callers get a uniform
//! `{ id }` view without the store fetching (or duplicating) the referenced
//! entity. Because the views are derived from the identifiers at access time,
//! they can never go stale.

use serde::Serialize;

/// Minimal projection of the user who sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderRef {
    /// Canonical string form of the sender identifier.
    pub id: String,
}

/// Minimal projection of the conversation a message belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationRef {
    /// Canonical string form of the conversation identifier.
    pub id: String,
}
