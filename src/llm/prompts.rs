//! LLM prompt constants and the mode → prompt table.
//!
//! These prompts are the contract between the detector and the model.
//! Every prompt starts with a language-context sentence: the chats this
//! tool sees are full of romanized Hindi/Bengali slang, and the model
//! reads them badly without the hint.

use super::types::{AnalysisMode, InputKind};

pub const VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const TEXT_MODEL: &str = "llama-3.3-70b-versatile";

pub const TEMPERATURE: f32 = 0.6;
pub const IMAGE_MAX_TOKENS: u32 = 1024;
/// Exported chats run long, so the analysis gets more room.
pub const TEXT_MAX_TOKENS: u32 = 2000;

pub const RELATIONSHIP_EXPERT_SYSTEM_PROMPT: &str = "You are a relationship expert AI.";

pub const CHAT_LOG_START: &str = "--- START OF CHAT LOG ---";
pub const CHAT_LOG_END: &str = "--- END OF CHAT LOG ---";

pub const IMAGE_LANGUAGE_CONTEXT: &str =
    "Note: Text may be Hinglish/Benglish. Understand the slang.";
pub const TEXT_LOG_LANGUAGE_CONTEXT: &str = "The following is a raw WhatsApp chat export. It may contain Hinglish (Hindi-English) or Benglish. Ignore timestamps.";

const FORMAT_CONSTRAINT: &str =
    "Do it within 20 sentence with 3 bullet points 1st one include score in percentage.";

/// Language hint that prefixes every prompt for the given input kind.
pub fn language_context(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Image => IMAGE_LANGUAGE_CONTEXT,
        InputKind::TextLog => TEXT_LOG_LANGUAGE_CONTEXT,
    }
}

/// Build the instruction for one analysis.
///
/// Pure function of `(mode, kind)`; nothing is cached.
pub fn build_prompt(mode: AnalysisMode, kind: InputKind) -> String {
    let body = match (mode, kind) {
        (AnalysisMode::RedFlagScan, InputKind::Image) => format!(
            "Analyze this chat image. Identify toxic traits. Be brutally honest. Give a 'Toxic Score' (0-100%). {FORMAT_CONSTRAINT}"
        ),
        (AnalysisMode::RedFlagScan, InputKind::TextLog) => format!(
            "Analyze the relationship dynamic in this chat log. Who is putting in more effort? Are there signs of manipulation? Give a Toxic Score between 0 to 100 %. {FORMAT_CONSTRAINT}"
        ),
        (AnalysisMode::RizzRate, InputKind::Image) => format!(
            "Rate the Rizz (0-100%). Is it cringe or smooth? {FORMAT_CONSTRAINT}"
        ),
        (AnalysisMode::RizzRate, InputKind::TextLog) => format!(
            "Read this chat history. Rate the flirting skills. Who has better 'game'? Quote specific lines. {FORMAT_CONSTRAINT}"
        ),
        (AnalysisMode::Summary, InputKind::Image) => "Summarize this conversation.".to_string(),
        (AnalysisMode::Summary, InputKind::TextLog) => {
            "Summarize the timeline of this conversation. How did the mood change from start to finish?"
                .to_string()
        }
    };
    format!("{} {}", language_context(kind), body)
}

/// Wrap the full chat log in start/end markers after the prompt.
pub fn build_chat_log_message(prompt: &str, chat_log: &str) -> String {
    format!("{prompt}\n\n{CHAT_LOG_START}\n{chat_log}\n{CHAT_LOG_END}")
}
