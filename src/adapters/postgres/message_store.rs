//! PostgreSQL implementation of the MessageStore port.
//!
//! Persists messages to a single `messages` table. Tags and likes live in
//! native Postgres arrays (tag search uses the GIN-indexed `&&` overlap
//! operator); reactions are stored as JSONB and never interpreted here.
//!
//! Every write is a single-row statement, so atomicity comes from the
//! database's per-statement guarantee. No transactions, no internal retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{
    ConversationId, MessageId, SenderId, Timestamp, ValidationError,
};
use crate::domain::message::{validate_tags, Message, MessageDraft, Reaction};
use crate::ports::{MessageStore, MessageStoreError};

const MESSAGE_COLUMNS: &str = "id, conversation_id, sender_id, text, tags, likes, reactions, \
     resolved, deleted, created_at, updated_at";

/// PostgreSQL implementation of MessageStore.
#[derive(Clone)]
pub struct PostgresMessageStore {
    pool: PgPool,
}

impl PostgresMessageStore {
    /// Creates a new PostgresMessageStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn create(
        &self,
        draft: MessageDraft,
        sender_id: SenderId,
    ) -> Result<Message, MessageStoreError> {
        let message = Message::new(draft, sender_id)?;

        let likes: Vec<Uuid> = message.likes().iter().map(|id| *id.as_uuid()).collect();
        sqlx::query(
            r#"
            INSERT INTO messages (
                id, conversation_id, sender_id, text, tags, likes, reactions,
                resolved, deleted, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(message.id().as_uuid())
        .bind(message.conversation_id().as_uuid())
        .bind(message.sender_id().as_uuid())
        .bind(message.text())
        .bind(message.tags())
        .bind(&likes)
        .bind(Json(message.reactions()))
        .bind(message.is_resolved())
        .bind(message.is_deleted())
        .bind(message.created_at().as_datetime())
        .bind(message.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            MessageStoreError::storage(format!("Failed to insert message: {}", e))
        })?;

        Ok(message)
    }

    async fn get_message(&self, id: &str) -> Result<Message, MessageStoreError> {
        let id: MessageId = id
            .parse()
            .map_err(|e: uuid::Error| ValidationError::invalid_format("id", e.to_string()))?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM messages WHERE id = $1",
            MESSAGE_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            MessageStoreError::storage(format!("Failed to fetch message: {}", e))
        })?;

        match row {
            Some(row) => Ok(row_to_message(&row)),
            None => Err(MessageStoreError::not_found(id)),
        }
    }

    async fn delete(&self, id: MessageId) -> Result<Message, MessageStoreError> {
        let row = sqlx::query(&format!(
            "UPDATE messages SET deleted = TRUE, updated_at = $2 WHERE id = $1 RETURNING {}",
            MESSAGE_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            MessageStoreError::storage(format!("Failed to delete message: {}", e))
        })?;

        let row = row.ok_or_else(|| MessageStoreError::not_found(id))?;
        Ok(row_to_message(&row))
    }

    async fn update_tags(
        &self,
        id: MessageId,
        tags: Vec<String>,
    ) -> Result<Message, MessageStoreError> {
        validate_tags(&tags)?;

        let row = sqlx::query(&format!(
            "UPDATE messages SET tags = $2, updated_at = $3 WHERE id = $1 RETURNING {}",
            MESSAGE_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(&tags)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            MessageStoreError::storage(format!("Failed to update tags: {}", e))
        })?;

        let row = row.ok_or_else(|| MessageStoreError::not_found(id))?;
        Ok(row_to_message(&row))
    }

    async fn find_messages_by_tags(
        &self,
        tags: &[String],
    ) -> Result<Vec<Message>, MessageStoreError> {
        if tags.is_empty() {
            return Err(ValidationError::empty_field("tags").into());
        }

        let rows = sqlx::query(&format!(
            "SELECT {} FROM messages WHERE tags && $1",
            MESSAGE_COLUMNS
        ))
        .bind(tags)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            MessageStoreError::storage(format!("Failed to search messages by tags: {}", e))
        })?;

        Ok(rows.iter().map(row_to_message).collect())
    }
}

// === Helper Functions ===

fn row_to_message(row: &PgRow) -> Message {
    let id: Uuid = row.get("id");
    let conversation_id: Uuid = row.get("conversation_id");
    let sender_id: Uuid = row.get("sender_id");
    let text: String = row.get("text");
    let tags: Vec<String> = row.get("tags");
    let likes: Vec<Uuid> = row.get("likes");
    let reactions: Json<Vec<Reaction>> = row.get("reactions");
    let resolved: bool = row.get("resolved");
    let deleted: bool = row.get("deleted");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    Message::reconstitute(
        MessageId::from_uuid(id),
        ConversationId::from_uuid(conversation_id),
        SenderId::from_uuid(sender_id),
        text,
        tags,
        likes.into_iter().map(SenderId::from_uuid).collect(),
        reactions.0,
        resolved,
        deleted,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    )
}
