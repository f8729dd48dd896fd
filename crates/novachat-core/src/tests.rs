use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::executor::block_on;

use novachat_types::event::ChatEvent;
use novachat_types::message::Role;
use novachat_types::model::ChatModel;
use novachat_types::settings::{Settings, ThemeChoice, SIDEBAR_KEY, THEME_KEY};
use novachat_types::{ChatError, Result};

use crate::event_bus::EventBus;
use crate::ports::StoragePort;
use crate::settings::{load_settings, save_settings};
use crate::store::*;

// ─── SessionStore: seed state ────────────────────────────

#[test]
fn test_store_seed_state() {
    let store = SessionStore::new();
    let titles: Vec<&str> = store
        .conversations()
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Marketing plan ideas",
            "Refactor React hooks",
            "Trip itinerary in Japan"
        ]
    );
    assert_eq!(store.active_id(), store.conversations()[0].id);
    assert_eq!(store.model(), ChatModel::Gpt4);

    for conversation in store.conversations() {
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, Role::Assistant);
        assert_eq!(conversation.messages[0].content, GREETING);
    }
}

#[test]
fn test_greeting_copy_matches_site() {
    // Typographic apostrophe, as shipped on the site
    assert_eq!(GREETING, "Hi! I’m NovaChat. How can I help today?");
}

// ─── SessionStore: send / deliver ────────────────────────

#[test]
fn test_send_blank_message_is_noop() {
    let mut store = SessionStore::new();
    assert!(store.send_message("").is_none());
    assert!(store.send_message("   \t\n").is_none());
    assert_eq!(store.active_conversation().messages.len(), 1);
    assert!(!store.has_pending_replies());
}

#[test]
fn test_send_message_appends_user_and_issues_ticket() {
    let mut store = SessionStore::new();
    let request = store.send_message("Hello").expect("non-blank send");

    assert_eq!(request.conversation, store.active_id());
    assert_eq!(request.content, "You said: \"Hello\"\n\n(Model: GPT-4)");

    let messages = &store.active_conversation().messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "Hello");
    assert!(store.is_replying(store.active_id()));
}

#[test]
fn test_send_message_trims_input() {
    let mut store = SessionStore::new();
    let request = store.send_message("  Hello  ").unwrap();
    assert_eq!(request.content, "You said: \"Hello\"\n\n(Model: GPT-4)");
    assert_eq!(store.active_conversation().messages[1].content, "Hello");
}

#[test]
fn test_deliver_reply_appends_exactly_one_assistant_message() {
    let mut store = SessionStore::new();
    let request = store.send_message("Hello").unwrap();

    assert!(store.deliver_reply(request.conversation, request.ticket, &request.content));

    let messages = &store.active_conversation().messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, "You said: \"Hello\"\n\n(Model: GPT-4)");
    assert!(!store.is_replying(store.active_id()));

    // Second delivery of the same ticket is dropped
    assert!(!store.deliver_reply(request.conversation, request.ticket, &request.content));
    assert_eq!(store.active_conversation().messages.len(), 3);
}

#[test]
fn test_reply_uses_model_selected_at_send_time() {
    let mut store = SessionStore::new();
    store.set_model(ChatModel::Claude3);
    let request = store.send_message("Hi").unwrap();
    store.set_model(ChatModel::GeminiPro);

    store.deliver_reply(request.conversation, request.ticket, &request.content);
    let last = store.active_conversation().messages.last().unwrap();
    assert_eq!(last.content, "You said: \"Hi\"\n\n(Model: Claude 3)");
}

#[test]
fn test_reply_lands_in_originating_conversation_after_switch() {
    let mut store = SessionStore::new();
    let origin = store.active_id();
    let request = store.send_message("Hello").unwrap();

    // Switch away before the timer fires
    let other = store.conversations()[1].id;
    store.select_conversation(other);

    assert!(store.deliver_reply(request.conversation, request.ticket, &request.content));

    // Active conversation is untouched; origin got the reply
    assert_eq!(store.active_conversation().messages.len(), 1);
    let origin_messages = &store
        .conversations()
        .iter()
        .find(|c| c.id == origin)
        .unwrap()
        .messages;
    assert_eq!(origin_messages.len(), 3);
    assert!(!store.is_replying(origin));
}

#[test]
fn test_two_in_flight_replies_both_deliver() {
    let mut store = SessionStore::new();
    let first = store.send_message("one").unwrap();
    let second = store.send_message("two").unwrap();
    assert_ne!(first.ticket, second.ticket);

    assert!(store.deliver_reply(first.conversation, first.ticket, &first.content));
    assert!(store.is_replying(store.active_id()));
    assert!(store.deliver_reply(second.conversation, second.ticket, &second.content));

    // greeting + 2 user + 2 assistant
    assert_eq!(store.active_conversation().messages.len(), 5);
}

#[test]
fn test_cancel_pending_drops_delivery() {
    let mut store = SessionStore::new();
    let request = store.send_message("Hello").unwrap();
    store.cancel_pending(request.conversation);

    assert!(!store.is_replying(request.conversation));
    assert!(!store.deliver_reply(request.conversation, request.ticket, &request.content));
    assert_eq!(store.active_conversation().messages.len(), 2);
}

// ─── SessionStore: selection / create / rename ───────────

#[test]
fn test_select_conversation() {
    let mut store = SessionStore::new();
    let target = store.conversations()[2].id;
    store.select_conversation(target);
    assert_eq!(store.active_id(), target);
    assert_eq!(store.active_conversation().title, "Trip itinerary in Japan");
}

#[test]
fn test_select_unknown_id_keeps_prior_selection() {
    let mut store = SessionStore::new();
    let before = store.active_id();
    store.select_conversation(novachat_types::conversation::ConversationId::new());
    assert_eq!(store.active_id(), before);
}

#[test]
fn test_create_conversation_prepends_and_activates() {
    let mut store = SessionStore::new();
    let id = store.create_conversation();

    assert_eq!(store.conversations().len(), 4);
    assert_eq!(store.conversations()[0].id, id);
    assert_eq!(store.active_id(), id);

    let conversation = store.active_conversation();
    assert_eq!(conversation.title, NEW_CHAT_TITLE);
    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].role, Role::Assistant);
    assert_eq!(conversation.messages[0].content, NEW_CHAT_GREETING);
}

#[test]
fn test_rename_conversation() {
    let mut store = SessionStore::new();
    let id = store.active_id();
    store.rename_conversation(id, "Trip Plan");
    assert_eq!(store.active_conversation().title, "Trip Plan");
    assert_eq!(store.conversations()[0].title, "Trip Plan");
}

#[test]
fn test_rename_to_empty_keeps_previous_title() {
    let mut store = SessionStore::new();
    let id = store.active_id();
    store.rename_conversation(id, "");
    assert_eq!(store.active_conversation().title, "Marketing plan ideas");
}

// ─── SessionStore: search filter ─────────────────────────

#[test]
fn test_filtered_conversations_case_insensitive() {
    let store = SessionStore::new();
    let hits = store.filtered_conversations("japan");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Trip itinerary in Japan");
}

#[test]
fn test_filtered_conversations_preserves_order() {
    let store = SessionStore::new();
    let hits = store.filtered_conversations("r");
    let titles: Vec<&str> = hits.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Marketing plan ideas",
            "Refactor React hooks",
            "Trip itinerary in Japan"
        ]
    );
}

#[test]
fn test_filtered_conversations_empty_search_matches_all() {
    let store = SessionStore::new();
    assert_eq!(store.filtered_conversations("").len(), 3);
    assert!(store.filtered_conversations("no such title").is_empty());
}

// ─── Reply template ──────────────────────────────────────

#[test]
fn test_compose_reply_template() {
    assert_eq!(
        compose_reply("Hello", ChatModel::Gpt4),
        "You said: \"Hello\"\n\n(Model: GPT-4)"
    );
    assert_eq!(
        compose_reply("multi\nline", ChatModel::Gpt35Turbo),
        "You said: \"multi\nline\"\n\n(Model: GPT-3.5 Turbo)"
    );
}

// ─── EventBus ────────────────────────────────────────────

#[test]
fn test_event_bus_new_is_empty() {
    let bus = EventBus::new();
    assert!(!bus.has_pending());
    assert!(bus.drain().is_empty());
}

#[test]
fn test_event_bus_emit_and_drain() {
    let bus = EventBus::new();
    let mut store = SessionStore::new();
    let request = store.send_message("ping").unwrap();

    bus.emit(ChatEvent::ReplyReady {
        conversation: request.conversation,
        ticket: request.ticket,
        content: request.content.clone(),
    });
    assert!(bus.has_pending());

    let events = bus.drain();
    assert_eq!(events.len(), 1);
    assert!(!bus.has_pending());
    assert!(bus.drain().is_empty());

    let ChatEvent::ReplyReady {
        conversation,
        ticket,
        content,
    } = &events[0];
    assert!(store.deliver_reply(*conversation, *ticket, content));
}

#[test]
fn test_event_bus_clone_shares_state() {
    let bus1 = EventBus::new();
    let bus2 = bus1.clone();

    let mut store = SessionStore::new();
    let request = store.send_message("x").unwrap();
    bus1.emit(ChatEvent::ReplyReady {
        conversation: request.conversation,
        ticket: request.ticket,
        content: request.content,
    });
    assert!(bus2.has_pending());
    assert_eq!(bus2.drain().len(), 1);
    assert!(!bus1.has_pending());
}

// ─── Settings load / save ────────────────────────────────

struct MapStorage {
    data: RefCell<HashMap<String, String>>,
}

impl MapStorage {
    fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

#[async_trait(?Send)]
impl StoragePort for MapStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .data
            .borrow()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &str {
        "map"
    }
}

struct BrokenStorage;

#[async_trait(?Send)]
impl StoragePort for BrokenStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(ChatError::Storage("quota exceeded".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ChatError::Storage("quota exceeded".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    async fn list_keys(&self, _prefix: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn backend_name(&self) -> &str {
        "broken"
    }
}

#[test]
fn test_settings_load_defaults_when_empty() {
    let storage = MapStorage::new();
    let settings = block_on(load_settings(&storage));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_save_then_load_roundtrip() {
    let storage = MapStorage::new();
    let saved = Settings {
        theme: ThemeChoice::Forest,
        sidebar_open: false,
    };
    block_on(save_settings(&storage, &saved)).unwrap();

    // Simulated reload: a fresh load from the same storage
    let loaded = block_on(load_settings(&storage));
    assert_eq!(loaded, saved);
}

#[test]
fn test_settings_sidebar_toggle_persists() {
    let storage = MapStorage::new();
    let mut settings = block_on(load_settings(&storage));
    assert!(settings.sidebar_open);

    settings.sidebar_open = !settings.sidebar_open;
    block_on(save_settings(&storage, &settings)).unwrap();

    assert!(!block_on(load_settings(&storage)).sidebar_open);
    assert_eq!(
        block_on(storage.get(SIDEBAR_KEY)).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn test_settings_load_rejects_unknown_values() {
    let storage = MapStorage::new();
    block_on(storage.set(THEME_KEY, "solarized")).unwrap();
    block_on(storage.set(SIDEBAR_KEY, "maybe")).unwrap();

    let settings = block_on(load_settings(&storage));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_load_survives_storage_errors() {
    let settings = block_on(load_settings(&BrokenStorage));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_save_propagates_storage_errors() {
    assert!(block_on(save_settings(&BrokenStorage, &Settings::default())).is_err());
}

#[test]
fn test_storage_port_exists_default_impl() {
    let storage = MapStorage::new();
    assert!(!block_on(storage.exists(THEME_KEY)).unwrap());
    block_on(storage.set(THEME_KEY, "dark")).unwrap();
    assert!(block_on(storage.exists(THEME_KEY)).unwrap());
    assert_eq!(block_on(storage.list_keys("novachat-")).unwrap().len(), 1);
}
