//! LLM wire types — analysis modes plus the chat-completion request/response.
//!
//! The request types serialize to the OpenAI-compatible shape GroqCloud
//! accepts. Message content is either a plain string or a list of typed
//! parts; the two request shapes in client.rs pick one or the other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user wants to know about the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisMode {
    #[default]
    RedFlagScan,
    RizzRate,
    Summary,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::RedFlagScan,
        AnalysisMode::RizzRate,
        AnalysisMode::Summary,
    ];

    /// Label shown in the mode picker.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::RedFlagScan => "Red Flag Scanner 🚩",
            AnalysisMode::RizzRate => "Rizz Rater ⚡",
            AnalysisMode::Summary => "The 'Summary' 📝",
        }
    }

    /// Short identifier used on the command line and over IPC.
    pub fn id(self) -> &'static str {
        match self {
            AnalysisMode::RedFlagScan => "red-flag",
            AnalysisMode::RizzRate => "rizz",
            AnalysisMode::Summary => "summary",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AnalysisMode::ALL
            .into_iter()
            .find(|mode| {
                mode.id() == wanted || format!("{:?}", mode).to_lowercase() == wanted
            })
            .ok_or_else(|| {
                format!(
                    "Unknown mode '{}' (expected one of: red-flag, rizz, summary)",
                    s
                )
            })
    }
}

/// Which upload path an analysis goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Image,
    TextLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One chat-completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

/// Plain text, or an ordered list of typed parts (multimodal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }

    /// All text carried by this message, parts joined with newlines.
    pub fn text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    ContentPart::ImageUrl { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// The subset of a chat-completion response we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: CompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
}

impl ChatCompletion {
    /// Text of the first choice, if the service returned any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_ids_and_variant_names() {
        assert_eq!("red-flag".parse::<AnalysisMode>(), Ok(AnalysisMode::RedFlagScan));
        assert_eq!("RIZZ".parse::<AnalysisMode>(), Ok(AnalysisMode::RizzRate));
        assert_eq!("rizzrate".parse::<AnalysisMode>(), Ok(AnalysisMode::RizzRate));
        assert_eq!(" summary ".parse::<AnalysisMode>(), Ok(AnalysisMode::Summary));
        assert!("vibes".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn default_mode_is_red_flag_scan() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::RedFlagScan);
    }

    #[test]
    fn multimodal_message_serializes_typed_parts() {
        let msg = ChatMessage::user_parts(vec![
            ContentPart::Text { text: "look".into() },
            ContentPart::ImageUrl {
                image_url: ImageUrl { url: "data:image/jpeg;base64,AA==".into() },
            },
        ]);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "look");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(json["content"][1]["image_url"]["url"], "data:image/jpeg;base64,AA==");
    }

    #[test]
    fn plain_message_serializes_as_string_content() {
        let json = serde_json::to_value(ChatMessage::system("hi")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn completion_reads_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}],
                       "usage":{"prompt_tokens":12,"completion_tokens":3}}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.first_text(), Some("ok"));
        assert_eq!(completion.usage.unwrap().prompt_tokens, 12);
    }

    #[test]
    fn completion_without_choices_has_no_text() {
        let completion: ChatCompletion = serde_json::from_str("{}").unwrap();
        assert!(completion.first_text().is_none());
    }
}
