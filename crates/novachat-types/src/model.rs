use serde::{Deserialize, Serialize};

/// Selectable chat model. There is no real backend; the label is echoed
/// into the canned assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    Gpt35Turbo,
    Gpt4,
    Claude3,
    GeminiPro,
}

impl ChatModel {
    pub fn all() -> &'static [ChatModel] {
        &[
            ChatModel::Gpt35Turbo,
            ChatModel::Gpt4,
            ChatModel::Claude3,
            ChatModel::GeminiPro,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "GPT-3.5 Turbo",
            ChatModel::Gpt4 => "GPT-4",
            ChatModel::Claude3 => "Claude 3",
            ChatModel::GeminiPro => "Gemini Pro",
        }
    }

    /// Short descriptor shown next to the label in the model menu.
    pub fn tagline(&self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "Faster, cheaper",
            ChatModel::Gpt4 => "Most capable",
            ChatModel::Claude3 => "Alternative AI",
            ChatModel::GeminiPro => "Google AI",
        }
    }
}

impl Default for ChatModel {
    fn default() -> Self {
        ChatModel::Gpt4
    }
}
