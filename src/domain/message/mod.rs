//! Message domain module.
//!
//! The Message entity and its satellite value objects: the creation draft,
//! emoji reactions, and the read-side relationship views.

mod message;
mod reaction;
mod refs;

pub use message::{validate_tags, Message, MessageDraft};
pub use reaction::Reaction;
pub use refs::{ConversationRef, SenderRef};
