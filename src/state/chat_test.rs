use time::macros::datetime;

use super::*;
use crate::notify::{NoticeKind, NotificationCenter};

fn now() -> OffsetDateTime {
    datetime!(2026-08-05 12:00:00 UTC)
}

#[test]
fn catalog_has_the_expected_providers() {
    assert_eq!(AI_MODELS.len(), 9);
    assert!(AI_MODELS.iter().any(|m| m.provider == "OpenAI"));
    assert!(AI_MODELS.iter().any(|m| m.provider == "Local"));
}

#[test]
fn model_display_name_falls_back_to_the_raw_id() {
    assert_eq!(model_display_name("gpt-4"), "ChatGPT (GPT-4)");
    assert_eq!(model_display_name("gemini-pro"), "Gemini Pro");
    assert_eq!(model_display_name("custom-model"), "custom-model");
}

#[test]
fn default_state_selects_gpt4_and_cannot_send() {
    let chat = ChatState::new();
    assert_eq!(chat.selected_model, "gpt-4");
    assert!(chat.messages.is_empty());
    assert!(!chat.can_send());
}

#[test]
fn can_send_requires_prompt_and_some_api_key() {
    let mut chat = ChatState::new();
    chat.prompt = "plot revenue by month".to_owned();
    assert!(!chat.can_send());

    chat.api_key = "sk-test".to_owned();
    assert!(chat.can_send());

    chat.api_key.clear();
    chat.env_api_key = "from-env".to_owned();
    assert!(chat.can_send());

    chat.pending = true;
    assert!(!chat.can_send());
}

#[test]
fn begin_send_without_key_reports_the_gating_notice() {
    let center = NotificationCenter::new();
    let mut chat = ChatState::new();
    chat.prompt = "plot something".to_owned();

    assert!(!chat.begin_send(&center, now()));
    assert!(chat.messages.is_empty());
    assert!(!chat.pending);
    let notice = center.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.title, "API Key Required");
}

#[test]
fn begin_send_with_blank_prompt_is_silent() {
    let center = NotificationCenter::new();
    let mut chat = ChatState::new();
    chat.api_key = "sk-test".to_owned();
    chat.prompt = "   ".to_owned();

    assert!(!chat.begin_send(&center, now()));
    assert!(center.is_empty());
}

#[test]
fn send_round_trip_appends_both_messages_and_reports_success() {
    let center = NotificationCenter::new();
    let mut chat = ChatState::new();
    chat.api_key = "sk-test".to_owned();
    chat.prompt = "  plot revenue  ".to_owned();

    assert!(chat.begin_send(&center, now()));
    assert!(chat.pending);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].role, ChatRole::User);
    assert_eq!(chat.messages[0].content, "plot revenue");

    chat.complete_send(&center, now());
    assert!(!chat.pending);
    assert!(chat.prompt.is_empty());
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[1].role, ChatRole::Assistant);
    assert!(chat.messages[1].content.contains("ChatGPT (GPT-4)"));

    let notice = center.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Graph Generated");
    assert!(notice.body.contains("ChatGPT (GPT-4)"));
}

#[test]
fn complete_send_without_pending_is_a_no_op() {
    let center = NotificationCenter::new();
    let mut chat = ChatState::new();

    chat.complete_send(&center, now());
    assert!(chat.messages.is_empty());
    assert!(center.is_empty());
}

#[test]
fn double_begin_send_does_not_duplicate_the_message() {
    let center = NotificationCenter::new();
    let mut chat = ChatState::new();
    chat.api_key = "sk-test".to_owned();
    chat.prompt = "plot revenue".to_owned();

    assert!(chat.begin_send(&center, now()));
    assert!(!chat.begin_send(&center, now()));
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn clear_drops_history_and_reports() {
    let center = NotificationCenter::new();
    let mut chat = ChatState::new();
    chat.api_key = "sk-test".to_owned();
    chat.prompt = "plot revenue".to_owned();
    chat.begin_send(&center, now());
    chat.complete_send(&center, now());

    chat.clear(&center);
    assert!(chat.messages.is_empty());
    assert_eq!(center.last().unwrap().title, "Chat Cleared");
}

#[test]
fn chat_message_serde_round_trip() {
    let message = ChatMessage {
        role: ChatRole::Assistant,
        content: "hello".to_owned(),
        sent_at: now(),
    };
    let json = serde_json::to_string(&message).unwrap();
    assert!(json.contains("\"assistant\""));
    let restored: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, message);
}
