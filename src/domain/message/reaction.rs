//! Emoji reactions attached to messages.

use crate::domain::foundation::SenderId;
use serde::{Deserialize, Serialize};

/// A single emoji reaction left on a message.
///
/// Reactions are owned by the conversation workflow; this core stores and
/// returns them verbatim without aggregation or interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// The reaction emoji, e.g. "👍".
    pub emoji: String,

    /// The user who reacted.
    pub user_id: SenderId,
}

impl Reaction {
    /// Creates a new reaction.
    pub fn new(emoji: impl Into<String>, user_id: SenderId) -> Self {
        Self {
            emoji: emoji.into(),
            user_id,
        }
    }
}
