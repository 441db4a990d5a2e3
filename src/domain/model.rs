use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 遠端模型的深度思考模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ThinkingMode {
    #[default]
    Disabled,
    Enabled,
    Auto,
}

impl fmt::Display for ThinkingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
            Self::Auto => "auto",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thinking {
    #[serde(rename = "type")]
    pub kind: ThinkingMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub thinking: Thinking,
}

impl ChatRequest {
    /// 單一 user 訊息的請求
    pub fn user(model: impl Into<String>, prompt: impl Into<String>, thinking: ThinkingMode) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: prompt.into(),
            }],
            thinking: Thinking { kind: thinking },
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl ChatResponse {
    /// 第一個 choice 的非空訊息內容
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub manual_path: PathBuf,
    pub prompt_chars: usize,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_thinking_type() {
        let request = ChatRequest::user("doubao-seed-1-6-251015", "hi", ThinkingMode::Disabled);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "doubao-seed-1-6-251015",
                "messages": [{"role": "user", "content": "hi"}],
                "thinking": {"type": "disabled"}
            })
        );
    }

    #[test]
    fn test_first_content_skips_empty_answers() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": ""}}]
        }))
        .unwrap();
        assert!(response.first_content().is_none());

        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "id": "resp-1",
            "choices": [{"message": {"role": "assistant", "content": "fn main() {}"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("fn main() {}"));
        assert_eq!(response.usage.unwrap().total_tokens, 14);
    }

    #[test]
    fn test_choice_without_message_has_no_content() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"index": 0, "finish_reason": "length"}]
        }))
        .unwrap();

        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("length"));
        assert!(response.first_content().is_none());
    }

    #[test]
    fn test_thinking_mode_display_matches_wire_name() {
        for mode in [ThinkingMode::Disabled, ThinkingMode::Enabled, ThinkingMode::Auto] {
            let wire = serde_json::to_value(mode).unwrap();
            assert_eq!(wire.as_str().unwrap(), mode.to_string());
        }
    }
}
