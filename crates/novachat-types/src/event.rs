use serde::{Deserialize, Serialize};

use crate::conversation::ConversationId;

/// Ticket for a single outstanding simulated reply. Issued by the session
/// store at send time, checked again at delivery so a cancelled or
/// superseded reply is dropped instead of leaking into another conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyTicket(pub u64);

/// Events delivered to the UI via the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// The simulated-latency timer for a reply elapsed.
    ReplyReady {
        conversation: ConversationId,
        ticket: ReplyTicket,
        content: String,
    },
}
