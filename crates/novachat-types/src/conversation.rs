use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::Message;

/// Opaque conversation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A conversation: a mutable title plus an append-only message list.
/// Conversations live for the duration of the page session; there is no
/// persistence across reloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ConversationId::new(),
            title: title.into(),
            messages: Vec::new(),
        }
    }

    /// Seed a conversation with a single assistant greeting.
    pub fn with_greeting(title: impl Into<String>, greeting: &str) -> Self {
        let mut conversation = Self::new(title);
        conversation.messages.push(Message::assistant(greeting));
        conversation
    }
}
