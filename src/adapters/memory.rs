//! In-memory message store implementation for testing.
//!
//! Provides synchronous, deterministic storage for unit and integration
//! tests.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in production.
//! It uses `.expect()` on lock operations which will panic if locks are
//! poisoned. Production code should use the PostgreSQL adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{MessageId, SenderId, ValidationError};
use crate::domain::message::{validate_tags, Message, MessageDraft};
use crate::ports::{MessageStore, MessageStoreError};

/// In-memory message store for testing.
///
/// Implements the full `MessageStore` contract, including visible-by-default
/// soft delete and full-replace tag updates, over a plain hash map.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
pub struct InMemoryMessageStore {
    messages: RwLock<HashMap<MessageId, Message>>,
}

impl InMemoryMessageStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(HashMap::new()),
        }
    }

    // === Test Helpers ===

    /// Returns the number of stored messages, deleted ones included.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn message_count(&self) -> usize {
        self.messages
            .read()
            .expect("InMemoryMessageStore: messages lock poisoned")
            .len()
    }

    /// Removes all stored messages (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.messages
            .write()
            .expect("InMemoryMessageStore: messages lock poisoned")
            .clear();
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create(
        &self,
        draft: MessageDraft,
        sender_id: SenderId,
    ) -> Result<Message, MessageStoreError> {
        let message = Message::new(draft, sender_id)?;

        self.messages
            .write()
            .expect("InMemoryMessageStore: messages lock poisoned")
            .insert(message.id(), message.clone());

        Ok(message)
    }

    async fn get_message(&self, id: &str) -> Result<Message, MessageStoreError> {
        let id: MessageId = id
            .parse()
            .map_err(|e: uuid::Error| ValidationError::invalid_format("id", e.to_string()))?;

        self.messages
            .read()
            .expect("InMemoryMessageStore: messages lock poisoned")
            .get(&id)
            .cloned()
            .ok_or_else(|| MessageStoreError::not_found(id))
    }

    async fn delete(&self, id: MessageId) -> Result<Message, MessageStoreError> {
        let mut messages = self
            .messages
            .write()
            .expect("InMemoryMessageStore: messages lock poisoned");

        let message = messages
            .get_mut(&id)
            .ok_or_else(|| MessageStoreError::not_found(id))?;

        message.mark_deleted();
        Ok(message.clone())
    }

    async fn update_tags(
        &self,
        id: MessageId,
        tags: Vec<String>,
    ) -> Result<Message, MessageStoreError> {
        validate_tags(&tags)?;

        let mut messages = self
            .messages
            .write()
            .expect("InMemoryMessageStore: messages lock poisoned");

        let message = messages
            .get_mut(&id)
            .ok_or_else(|| MessageStoreError::not_found(id))?;

        message.replace_tags(tags)?;
        Ok(message.clone())
    }

    async fn find_messages_by_tags(
        &self,
        tags: &[String],
    ) -> Result<Vec<Message>, MessageStoreError> {
        if tags.is_empty() {
            return Err(ValidationError::empty_field("tags").into());
        }

        let messages = self
            .messages
            .read()
            .expect("InMemoryMessageStore: messages lock poisoned");

        Ok(messages
            .values()
            .filter(|message| tags.iter().any(|tag| message.tags().contains(tag)))
            .cloned()
            .collect())
    }
}
