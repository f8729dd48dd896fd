//! WASM-target tests for novachat-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use novachat_types::conversation::*;
use novachat_types::event::*;
use novachat_types::message::*;
use novachat_types::model::*;
use novachat_types::settings::*;

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = Message::assistant("Hi there");
    assert_eq!(msg.role, Role::Assistant);
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = Message::assistant("canned reply");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.role, Role::Assistant);
    assert_eq!(deserialized.content, "canned reply");
}

#[wasm_bindgen_test]
fn conversation_with_greeting() {
    let conversation = Conversation::with_greeting("New Chat", "Ask me anything!");
    assert_eq!(conversation.title, "New Chat");
    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].role, Role::Assistant);
}

#[wasm_bindgen_test]
fn model_labels() {
    assert_eq!(ChatModel::Gpt4.label(), "GPT-4");
    assert_eq!(ChatModel::default(), ChatModel::Gpt4);
    assert_eq!(ChatModel::all().len(), 4);
}

#[wasm_bindgen_test]
fn theme_parse_and_fallback() {
    assert_eq!(ThemeChoice::parse("ocean"), Some(ThemeChoice::Ocean));
    assert_eq!(ThemeChoice::parse("neon"), None);
    assert_eq!(ThemeChoice::default(), ThemeChoice::Light);
}

#[wasm_bindgen_test]
fn chat_event_serialization_roundtrip() {
    let event = ChatEvent::ReplyReady {
        conversation: ConversationId::new(),
        ticket: ReplyTicket(7),
        content: "You said: \"hi\"\n\n(Model: GPT-4)".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    let deserialized: ChatEvent = serde_json::from_str(&json).unwrap();
    let ChatEvent::ReplyReady { ticket, content, .. } = deserialized;
    assert_eq!(ticket, ReplyTicket(7));
    assert!(content.starts_with("You said:"));
}
