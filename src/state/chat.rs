//! AI graphing chat state — prompt box, history, and model selection.
//!
//! DESIGN
//! ======
//! The AI call itself is stubbed: sends are gated on a prompt and an API
//! key, the user message is appended immediately, and the "response" is a
//! canned acknowledgement naming the selected model. Wiring a real model
//! call in later only replaces [`ChatState::complete_send`]'s reply source.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::notify::{Notice, NotificationSink};

/// A selectable chat model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
}

/// Models offered by the model picker.
pub const AI_MODELS: &[ModelInfo] = &[
    ModelInfo { id: "gpt-4", name: "ChatGPT (GPT-4)", provider: "OpenAI" },
    ModelInfo { id: "gpt-3.5-turbo", name: "ChatGPT (GPT-3.5)", provider: "OpenAI" },
    ModelInfo { id: "gemini-pro", name: "Gemini Pro", provider: "Google" },
    ModelInfo { id: "gemini-ultra", name: "Gemini Ultra", provider: "Google" },
    ModelInfo { id: "deepseek-coder", name: "DeepSeek Coder", provider: "DeepSeek" },
    ModelInfo { id: "llama-3-70b", name: "Llama 3 (70B)", provider: "Meta" },
    ModelInfo { id: "llama-3-8b", name: "Llama 3 (8B)", provider: "Meta" },
    ModelInfo { id: "ollama-local", name: "Ollama (Local)", provider: "Local" },
    ModelInfo { id: "lmstudio-local", name: "LM Studio (Local)", provider: "Local" },
];

/// Display name for a model id, falling back to the raw id for models not
/// in the catalog.
#[must_use]
pub fn model_display_name(id: &str) -> String {
    AI_MODELS
        .iter()
        .find(|m| m.id == id)
        .map_or_else(|| id.to_owned(), |m| m.name.to_owned())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
}

/// Chat panel state for the AI graphing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub prompt: String,
    pub selected_model: String,
    /// Key typed into the settings panel.
    pub api_key: String,
    /// Key supplied by the host environment; either source unlocks sending.
    pub env_api_key: String,
    pub pending: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            prompt: String::new(),
            selected_model: "gpt-4".to_owned(),
            api_key: String::new(),
            env_api_key: String::new(),
            pending: false,
        }
    }
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty() || !self.env_api_key.trim().is_empty()
    }

    /// Whether the send button is enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.pending && !self.prompt.trim().is_empty() && self.has_api_key()
    }

    /// Start a send: append the user message and mark the reply pending.
    /// A blank prompt is ignored; a missing API key reports the gating
    /// notice. Returns whether the send started.
    pub fn begin_send(&mut self, sink: &dyn NotificationSink, now: OffsetDateTime) -> bool {
        if self.prompt.trim().is_empty() {
            return false;
        }
        if !self.has_api_key() {
            sink.report(Notice::failure(
                "API Key Required",
                "Please enter your API key or set an environment variable to use the AI graphing feature.",
            ));
            return false;
        }
        if self.pending {
            return false;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: self.prompt.trim().to_owned(),
            sent_at: now,
        });
        self.pending = true;
        true
    }

    /// Finish a pending send with the canned acknowledgement and report the
    /// generated-graph notice. No-op unless a send is pending.
    pub fn complete_send(&mut self, sink: &dyn NotificationSink, now: OffsetDateTime) {
        if !self.pending {
            return;
        }

        let model_name = model_display_name(&self.selected_model);
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: canned_reply(&model_name),
            sent_at: now,
        });
        self.pending = false;
        self.prompt.clear();
        sink.report(Notice::success(
            "Graph Generated",
            format!("Your AI-generated graph using {model_name} is now available."),
        ));
    }

    /// Drop the conversation history.
    pub fn clear(&mut self, sink: &dyn NotificationSink) {
        self.messages.clear();
        sink.report(Notice::success(
            "Chat Cleared",
            "Your conversation history has been cleared.",
        ));
    }
}

fn canned_reply(model_name: &str) -> String {
    format!(
        "I've generated a graph based on your prompt using {model_name}. \
         Here's the visualization of the data you requested."
    )
}
