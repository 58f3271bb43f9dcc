//! Integration tests for the message store contract.
//!
//! These tests verify the end-to-end behavior of the five store operations:
//! 1. Create persists a fully-populated message with relationship views
//! 2. Get returns the stored record, deleted or not
//! 3. Delete is a visible, monotonic soft delete
//! 4. Tag updates replace the full set, never merge
//! 5. Tag search unions across tags and across messages
//!
//! Uses the in-memory implementation to exercise the contract without
//! external dependencies; the PostgreSQL adapter implements the same port.

use campus_chat::adapters::InMemoryMessageStore;
use campus_chat::domain::foundation::{ConversationId, MessageId, SenderId};
use campus_chat::domain::message::MessageDraft;
use campus_chat::ports::{MessageStore, MessageStoreError};
use campus_chat::telemetry;

fn draft(conversation_id: ConversationId, text: &str) -> MessageDraft {
    MessageDraft::new(conversation_id, text)
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_returns_fully_populated_message() {
    let store = InMemoryMessageStore::new();
    let conversation_id = ConversationId::new();
    let sender_id = SenderId::new();

    let message = store
        .create(draft(conversation_id, "Hello world"), sender_id)
        .await
        .unwrap();

    assert_eq!(message.text(), "Hello world");
    assert_eq!(message.conversation_id(), conversation_id);
    assert_eq!(message.sender_id(), sender_id);
    assert!(message.likes().is_empty());
    assert_eq!(message.likes_count(), 0);
    assert!(message.reactions().is_empty());
    assert!(message.tags().is_empty());
    assert!(!message.is_resolved());
    assert!(!message.is_deleted());
    assert_eq!(message.sender().id, sender_id.to_string());
    assert_eq!(message.conversation().id, conversation_id.to_string());
}

#[tokio::test]
async fn create_rejects_empty_text() {
    let store = InMemoryMessageStore::new();

    let result = store
        .create(draft(ConversationId::new(), ""), SenderId::new())
        .await;

    assert!(matches!(result, Err(MessageStoreError::Validation(_))));
    assert_eq!(store.message_count(), 0);
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn created_message_is_immediately_retrievable() {
    telemetry::init_tracing();
    let store = InMemoryMessageStore::new();

    let sent = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    let got = store.get_message(&sent.id().to_string()).await.unwrap();

    assert_eq!(got, sent);
}

#[tokio::test]
async fn get_message_rejects_malformed_identifier() {
    let store = InMemoryMessageStore::new();

    let result = store.get_message("not-a-valid-id").await;

    assert!(matches!(result, Err(MessageStoreError::Validation(_))));
}

#[tokio::test]
async fn get_message_unknown_id_is_not_found() {
    let store = InMemoryMessageStore::new();

    let result = store.get_message(&MessageId::new().to_string()).await;

    assert!(matches!(result, Err(MessageStoreError::NotFound { .. })));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_soft_deletes_message() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(
            draft(ConversationId::new(), "Message to delete"),
            SenderId::new(),
        )
        .await
        .unwrap();
    assert!(!message.is_deleted());

    let deleted = store.delete(message.id()).await.unwrap();
    assert!(deleted.is_deleted());

    let retrieved = store.get_message(&message.id().to_string()).await.unwrap();
    assert!(retrieved.is_deleted());
}

#[tokio::test]
async fn delete_keeps_content_and_record() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(
            draft(ConversationId::new(), "Message to delete"),
            SenderId::new(),
        )
        .await
        .unwrap();
    store
        .update_tags(message.id(), vec!["courses".to_string()])
        .await
        .unwrap();

    let deleted = store.delete(message.id()).await.unwrap();

    assert_eq!(deleted.text(), "Message to delete");
    assert_eq!(deleted.tags(), ["courses".to_string()]);
    // Soft delete never removes the record from storage.
    assert_eq!(store.message_count(), 1);
}

#[tokio::test]
async fn delete_is_monotonic() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    store.delete(message.id()).await.unwrap();
    let second = store.delete(message.id()).await.unwrap();

    assert!(second.is_deleted());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let store = InMemoryMessageStore::new();

    let result = store.delete(MessageId::new()).await;

    assert!(matches!(result, Err(MessageStoreError::NotFound { .. })));
}

// =============================================================================
// Update tags
// =============================================================================

#[tokio::test]
async fn update_tags_sets_tag_collection() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(
            draft(ConversationId::new(), "Message to update tags"),
            SenderId::new(),
        )
        .await
        .unwrap();
    assert_eq!(message.tags().len(), 0);

    let tags = vec!["courses".to_string(), "computer science".to_string()];
    let updated = store.update_tags(message.id(), tags).await.unwrap();

    assert_eq!(updated.tags().len(), 2);
    assert!(updated.tags().contains(&"courses".to_string()));
    assert!(updated.tags().contains(&"computer science".to_string()));

    let retrieved = store.get_message(&message.id().to_string()).await.unwrap();
    assert_eq!(retrieved.tags().len(), 2);
}

#[tokio::test]
async fn update_tags_fully_replaces_previous_set() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    store
        .update_tags(message.id(), vec!["a".to_string(), "b".to_string()])
        .await
        .unwrap();
    let updated = store
        .update_tags(message.id(), vec!["c".to_string()])
        .await
        .unwrap();

    assert_eq!(updated.tags(), ["c".to_string()]);
}

#[tokio::test]
async fn update_tags_same_input_is_idempotent() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    let tags = vec!["courses".to_string(), "alumni".to_string()];
    let first = store.update_tags(message.id(), tags.clone()).await.unwrap();
    let second = store.update_tags(message.id(), tags.clone()).await.unwrap();

    assert_eq!(first.tags(), second.tags());
    assert_eq!(second.tags(), &tags[..]);
}

#[tokio::test]
async fn update_tags_with_empty_list_clears_tags() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    store
        .update_tags(message.id(), vec!["courses".to_string()])
        .await
        .unwrap();
    let cleared = store.update_tags(message.id(), Vec::new()).await.unwrap();

    assert!(cleared.tags().is_empty());
}

#[tokio::test]
async fn update_tags_rejects_empty_tag() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    let result = store
        .update_tags(message.id(), vec!["courses".to_string(), "".to_string()])
        .await;

    assert!(matches!(result, Err(MessageStoreError::Validation(_))));
}

#[tokio::test]
async fn update_tags_unknown_id_is_not_found() {
    let store = InMemoryMessageStore::new();

    let result = store
        .update_tags(MessageId::new(), vec!["courses".to_string()])
        .await;

    assert!(matches!(result, Err(MessageStoreError::NotFound { .. })));
}

// =============================================================================
// Find by tags
// =============================================================================

#[tokio::test]
async fn find_messages_by_tags_unions_across_messages() {
    let store = InMemoryMessageStore::new();
    let conversation_id = ConversationId::new();
    let sender_id = SenderId::new();

    let first = store
        .create(draft(conversation_id, "Message to find with tags"), sender_id)
        .await
        .unwrap();
    store
        .update_tags(first.id(), vec!["courses".to_string(), "alumni".to_string()])
        .await
        .unwrap();

    let second = store
        .create(draft(conversation_id, "Message to find with tags"), sender_id)
        .await
        .unwrap();
    store
        .update_tags(
            second.id(),
            vec!["courses".to_string(), "graduate".to_string()],
        )
        .await
        .unwrap();

    let messages = store
        .find_messages_by_tags(&["courses".to_string()])
        .await
        .unwrap();
    assert_eq!(messages.len(), 2);

    let alumni_only = store
        .find_messages_by_tags(&["alumni".to_string()])
        .await
        .unwrap();
    assert_eq!(alumni_only.len(), 1);
    assert_eq!(alumni_only[0].id(), first.id());
}

#[tokio::test]
async fn find_messages_by_tags_unions_across_tags() {
    let store = InMemoryMessageStore::new();
    let conversation_id = ConversationId::new();
    let sender_id = SenderId::new();

    let first = store
        .create(draft(conversation_id, "Tagged alumni"), sender_id)
        .await
        .unwrap();
    store
        .update_tags(first.id(), vec!["alumni".to_string()])
        .await
        .unwrap();

    let second = store
        .create(draft(conversation_id, "Tagged graduate"), sender_id)
        .await
        .unwrap();
    store
        .update_tags(second.id(), vec!["graduate".to_string()])
        .await
        .unwrap();

    // One message per tag: OR semantics must return both.
    let messages = store
        .find_messages_by_tags(&["alumni".to_string(), "graduate".to_string()])
        .await
        .unwrap();
    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn find_messages_by_tags_includes_deleted_messages() {
    let store = InMemoryMessageStore::new();

    let message = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();
    store
        .update_tags(message.id(), vec!["courses".to_string()])
        .await
        .unwrap();
    store.delete(message.id()).await.unwrap();

    let messages = store
        .find_messages_by_tags(&["courses".to_string()])
        .await
        .unwrap();

    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_deleted());
}

#[tokio::test]
async fn find_messages_by_tags_rejects_empty_list() {
    let store = InMemoryMessageStore::new();

    let result = store.find_messages_by_tags(&[]).await;

    assert!(matches!(result, Err(MessageStoreError::Validation(_))));
}

#[tokio::test]
async fn find_messages_by_tags_returns_empty_for_unknown_tag() {
    let store = InMemoryMessageStore::new();

    store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    let messages = store
        .find_messages_by_tags(&["nonexistent".to_string()])
        .await
        .unwrap();

    assert!(messages.is_empty());
}

// =============================================================================
// Cross-cutting invariants
// =============================================================================

#[tokio::test]
async fn likes_count_matches_likes_after_every_operation() {
    let store = InMemoryMessageStore::new();

    let created = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();
    assert_eq!(created.likes_count(), created.likes().len());

    let tagged = store
        .update_tags(created.id(), vec!["courses".to_string()])
        .await
        .unwrap();
    assert_eq!(tagged.likes_count(), tagged.likes().len());

    let deleted = store.delete(created.id()).await.unwrap();
    assert_eq!(deleted.likes_count(), deleted.likes().len());
}

#[tokio::test]
async fn mutations_advance_updated_at() {
    let store = InMemoryMessageStore::new();

    let created = store
        .create(draft(ConversationId::new(), "Hello world"), SenderId::new())
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let deleted = store.delete(created.id()).await.unwrap();

    assert!(deleted.updated_at().is_after(created.updated_at()));
    assert_eq!(deleted.created_at(), created.created_at());
}
