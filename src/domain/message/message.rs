//! Message entity for conversation content.
//!
//! A message belongs to exactly one conversation and has exactly one sender,
//! both immutable after creation. Social metadata (likes, reactions, tags) and
//! the soft-delete flag live on the message itself.

use crate::domain::foundation::{
    ConversationId, MessageId, SenderId, Timestamp, ValidationError,
};
use crate::domain::message::{ConversationRef, Reaction, SenderRef};
use serde::{Deserialize, Serialize};

/// Caller-supplied payload for creating a message.
///
/// The sender identifier is deliberately absent: it is resolved by the calling
/// layer and passed to the store separately, never trusted from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    conversation_id: ConversationId,
    text: String,
}

impl MessageDraft {
    /// Creates a draft for a message in the given conversation.
    pub fn new(conversation_id: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation_id,
            text: text.into(),
        }
    }

    /// Returns the target conversation.
    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A message within a conversation.
///
/// # Invariants
///
/// - `id` is globally unique and never reused
/// - `text` is non-empty (validated at construction)
/// - `likes_count()` always equals `likes().len()` (derived, not stored)
/// - `deleted` is monotonic: no operation on this type sets it back to false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The conversation this message belongs to.
    conversation_id: ConversationId,

    /// The user who sent this message.
    sender_id: SenderId,

    /// The message content.
    text: String,

    /// Free-text labels, stored verbatim in caller order.
    tags: Vec<String>,

    /// Users who liked this message.
    likes: Vec<SenderId>,

    /// Emoji reactions, opaque to this core.
    reactions: Vec<Reaction>,

    /// Set by the conversation workflow; stored, never interpreted here.
    resolved: bool,

    /// Soft-delete flag; the record is never physically removed.
    deleted: bool,

    /// When the message was created.
    created_at: Timestamp,

    /// When the message was last mutated.
    updated_at: Timestamp,
}

impl Message {
    /// Creates a new message from a draft and the resolved sender.
    ///
    /// Likes, reactions, and tags start empty; the message is neither resolved
    /// nor deleted.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the draft text is empty or whitespace-only
    pub fn new(draft: MessageDraft, sender_id: SenderId) -> Result<Self, ValidationError> {
        if draft.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: MessageId::new(),
            conversation_id: draft.conversation_id,
            sender_id,
            text: draft.text,
            tags: Vec::new(),
            likes: Vec::new(),
            reactions: Vec::new(),
            resolved: false,
            deleted: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a message from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MessageId,
        conversation_id: ConversationId,
        sender_id: SenderId,
        text: String,
        tags: Vec<String>,
        likes: Vec<SenderId>,
        reactions: Vec<Reaction>,
        resolved: bool,
        deleted: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            conversation_id,
            sender_id,
            text,
            tags,
            likes,
            reactions,
            resolved,
            deleted,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the message ID.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the conversation this message belongs to.
    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Returns the sender of this message.
    pub fn sender_id(&self) -> SenderId {
        self.sender_id
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tags in stored order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the users who liked this message.
    pub fn likes(&self) -> &[SenderId] {
        &self.likes
    }

    /// Returns the number of likes.
    ///
    /// Derived from the likes collection, so it cannot drift from it.
    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    /// Returns the reactions on this message.
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Returns whether the conversation workflow marked this message resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns whether this message has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the message was last mutated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the read-side view of the sender relationship.
    pub fn sender(&self) -> SenderRef {
        SenderRef {
            id: self.sender_id.to_string(),
        }
    }

    /// Returns the read-side view of the conversation relationship.
    pub fn conversation(&self) -> ConversationRef {
        ConversationRef {
            id: self.conversation_id.to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks this message as deleted.
    ///
    /// Soft delete only: text, tags, likes, and reactions are untouched.
    /// Deletion is monotonic; calling this on an already-deleted message
    /// leaves it deleted.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Timestamp::now();
    }

    /// Replaces the entire tag set with the given sequence.
    ///
    /// Full replacement, never a merge: the previous tags are discarded.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if any tag is empty or whitespace-only
    pub fn replace_tags(&mut self, tags: Vec<String>) -> Result<(), ValidationError> {
        validate_tags(&tags)?;
        self.tags = tags;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

/// Validates a tag sequence for storage.
///
/// An empty sequence is valid here (it clears the tag set); individual tags
/// must be non-empty after trimming.
pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().any(|tag| tag.trim().is_empty()) {
        return Err(ValidationError::invalid_format(
            "tags",
            "tags cannot be empty strings",
        ));
    }
    Ok(())
}
