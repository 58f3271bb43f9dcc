//! Message store port.
//!
//! Defines the contract for persisting and retrieving conversation messages.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Single-document operations**: every write touches exactly one record
//!   and relies on the storage engine's per-document atomicity
//! - **Visible-by-default soft delete**: reads return deleted messages;
//!   filtering them is the calling layer's policy
//! - **No internal retries**: transient storage failures surface as
//!   `Storage` errors for an external retry policy to handle

use crate::domain::foundation::{MessageId, SenderId, ValidationError};
use crate::domain::message::{Message, MessageDraft};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by message store operations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// Malformed or missing input; the caller can recover by fixing it.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced message does not exist.
    #[error("Message '{id}' not found")]
    NotFound { id: MessageId },

    /// The underlying storage engine failed; the caller owns retry policy.
    #[error("Storage engine failure: {reason}")]
    Storage { reason: String },
}

impl MessageStoreError {
    /// Creates a not-found error for the given message id.
    pub fn not_found(id: MessageId) -> Self {
        MessageStoreError::NotFound { id }
    }

    /// Creates a storage failure error.
    pub fn storage(reason: impl Into<String>) -> Self {
        MessageStoreError::Storage {
            reason: reason.into(),
        }
    }
}

/// Port for message persistence.
///
/// The sole data-access component of the chat feature. Implementations must
/// ensure:
/// - Soft delete only: no operation physically removes a record
/// - Tag updates replace the full set, never merge
/// - Returned messages carry their sender/conversation relationship views
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persists a new message.
    ///
    /// The sender identifier comes from the calling layer's identity
    /// resolution, never from the draft. The stored message starts with empty
    /// likes, reactions, and tags, and is neither resolved nor deleted.
    ///
    /// # Errors
    ///
    /// - `Validation` if the draft text is empty
    /// - `Storage` on persistence failure
    async fn create(
        &self,
        draft: MessageDraft,
        sender_id: SenderId,
    ) -> Result<Message, MessageStoreError>;

    /// Fetches a single message by the string form of its identifier.
    ///
    /// Returns the message deleted or not; callers decide how to treat the
    /// deleted flag.
    ///
    /// # Errors
    ///
    /// - `Validation` if the identifier is not a well-formed id
    /// - `NotFound` if no message has that id
    /// - `Storage` on read failure
    async fn get_message(&self, id: &str) -> Result<Message, MessageStoreError>;

    /// Marks a message as deleted without removing it.
    ///
    /// Likes, reactions, tags, and text survive. Returns the updated message.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no message has that id
    /// - `Storage` on write failure
    async fn delete(&self, id: MessageId) -> Result<Message, MessageStoreError>;

    /// Replaces a message's entire tag set with the given sequence.
    ///
    /// Full replacement, never a merge; an empty sequence clears the tags.
    /// Returns the updated message.
    ///
    /// # Errors
    ///
    /// - `Validation` if any tag is empty
    /// - `NotFound` if no message has that id
    /// - `Storage` on write failure
    async fn update_tags(
        &self,
        id: MessageId,
        tags: Vec<String>,
    ) -> Result<Message, MessageStoreError>;

    /// Finds every message carrying at least one of the given tags.
    ///
    /// Union semantics across tags and across conversations; no ordering
    /// contract; deleted messages are included.
    ///
    /// # Errors
    ///
    /// - `Validation` if the tag list is empty
    /// - `Storage` on read failure
    async fn find_messages_by_tags(
        &self,
        tags: &[String],
    ) -> Result<Vec<Message>, MessageStoreError>;
}
