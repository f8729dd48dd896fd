//! Conversation session store — the single owner of the conversation list,
//! the active selection, and the outstanding simulated-reply tickets.
//!
//! All mutation happens on the UI event thread; the only suspension point
//! in the whole system is the fixed-delay timer the app layer runs between
//! `send_message` and `deliver_reply`. A reply is bound to the conversation
//! it was sent from, so switching conversations mid-flight can no longer
//! leak the reply into whatever happens to be active when the timer fires.

use novachat_types::conversation::{Conversation, ConversationId};
use novachat_types::event::ReplyTicket;
use novachat_types::message::Message;
use novachat_types::model::ChatModel;

/// Greeting seeded into each initial conversation.
pub const GREETING: &str = "Hi! I’m NovaChat. How can I help today?";
/// Greeting seeded into a freshly created conversation.
pub const NEW_CHAT_GREETING: &str = "New chat started. Ask me anything!";
/// Title given to a freshly created conversation.
pub const NEW_CHAT_TITLE: &str = "New Chat";
/// Simulated network latency before the canned reply arrives.
pub const REPLY_DELAY_MS: u32 = 700;

/// Returned by [`SessionStore::send_message`]: everything the app layer
/// needs to schedule the delayed delivery. The reply content is computed
/// at send time from the input and the model selected at that moment.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub conversation: ConversationId,
    pub ticket: ReplyTicket,
    pub content: String,
}

struct PendingReply {
    conversation: ConversationId,
    ticket: ReplyTicket,
}

pub struct SessionStore {
    conversations: Vec<Conversation>,
    active: ConversationId,
    model: ChatModel,
    pending: Vec<PendingReply>,
    next_ticket: u64,
}

impl SessionStore {
    /// Build the seeded store: three example conversations, first active,
    /// each holding a single assistant greeting.
    pub fn new() -> Self {
        let conversations = vec![
            Conversation::with_greeting("Marketing plan ideas", GREETING),
            Conversation::with_greeting("Refactor React hooks", GREETING),
            Conversation::with_greeting("Trip itinerary in Japan", GREETING),
        ];
        let active = conversations[0].id;
        Self {
            conversations,
            active,
            model: ChatModel::default(),
            pending: Vec::new(),
            next_ticket: 0,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn active_id(&self) -> ConversationId {
        self.active
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn set_model(&mut self, model: ChatModel) {
        self.model = model;
    }

    /// The active conversation. Falls back to the first conversation if the
    /// active id ever stops referencing one, so the header can never show a
    /// mismatched title. The store is never empty.
    pub fn active_conversation(&self) -> &Conversation {
        self.conversations
            .iter()
            .find(|c| c.id == self.active)
            .unwrap_or(&self.conversations[0])
    }

    fn conversation_mut(&mut self, id: ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Select a conversation. An unknown id is ignored and the prior
    /// selection is kept.
    pub fn select_conversation(&mut self, id: ConversationId) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.active = id;
        } else {
            log::warn!("select_conversation: unknown id, keeping current selection");
        }
    }

    /// Prepend a fresh conversation, make it active, and seed it with a
    /// single assistant greeting.
    pub fn create_conversation(&mut self) -> ConversationId {
        let conversation = Conversation::with_greeting(NEW_CHAT_TITLE, NEW_CHAT_GREETING);
        let id = conversation.id;
        self.conversations.insert(0, conversation);
        self.active = id;
        id
    }

    /// Rename a conversation. An empty title leaves the stored title
    /// unchanged (the inline editor commits on Enter or blur; Escape never
    /// reaches this method).
    pub fn rename_conversation(&mut self, id: ConversationId, new_title: &str) {
        if new_title.is_empty() {
            return;
        }
        if let Some(conversation) = self.conversation_mut(id) {
            conversation.title = new_title.to_string();
        }
    }

    /// Append a user message to the active conversation and issue a ticket
    /// for the simulated reply. Blank input is a no-op.
    pub fn send_message(&mut self, text: &str) -> Option<ReplyRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let content = compose_reply(text, self.model);
        let conversation_id = self.active_conversation().id;
        self.active = conversation_id;

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;

        if let Some(conversation) = self.conversation_mut(conversation_id) {
            conversation.messages.push(Message::user(text));
        }
        self.pending.push(PendingReply {
            conversation: conversation_id,
            ticket,
        });

        Some(ReplyRequest {
            conversation: conversation_id,
            ticket,
            content,
        })
    }

    /// Deliver a simulated reply. The message lands in the conversation the
    /// ticket was issued for, whether or not it is still active. Returns
    /// false when the ticket is no longer outstanding (cancelled, or the
    /// conversation vanished) — the reply is silently dropped.
    pub fn deliver_reply(
        &mut self,
        conversation: ConversationId,
        ticket: ReplyTicket,
        content: &str,
    ) -> bool {
        let Some(index) = self
            .pending
            .iter()
            .position(|p| p.conversation == conversation && p.ticket == ticket)
        else {
            log::warn!("deliver_reply: stale ticket, dropping reply");
            return false;
        };
        self.pending.remove(index);

        match self.conversation_mut(conversation) {
            Some(target) => {
                target.messages.push(Message::assistant(content));
                true
            }
            None => false,
        }
    }

    /// Forget all outstanding reply tickets for a conversation. Late timer
    /// callbacks for those tickets become no-ops.
    pub fn cancel_pending(&mut self, conversation: ConversationId) {
        self.pending.retain(|p| p.conversation != conversation);
    }

    /// True while the conversation has a reply in flight; drives the
    /// typing indicator.
    pub fn is_replying(&self, conversation: ConversationId) -> bool {
        self.pending.iter().any(|p| p.conversation == conversation)
    }

    pub fn has_pending_replies(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Ordered subsequence of conversations whose title contains `search`
    /// case-insensitively. Pure; an empty search matches everything.
    pub fn filtered_conversations(&self, search: &str) -> Vec<&Conversation> {
        let needle = search.to_lowercase();
        self.conversations
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The deterministic canned reply: the echoed input plus the model label
/// selected at send time.
pub fn compose_reply(text: &str, model: ChatModel) -> String {
    format!("You said: \"{}\"\n\n(Model: {})", text, model.label())
}
