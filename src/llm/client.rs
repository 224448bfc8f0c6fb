//! Inference client — one round trip to the chat-completion endpoint.
//!
//! Two request shapes, never mixed:
//!   - image path: one user message, [prompt text, data-URI image], vision model
//!   - text path:  system persona + user message with the wrapped chat log, text model
//!
//! No retries and no client-side timeout. Every failure comes back as an
//! `InferenceError`, which `render` turns into an `Error: ...` string.

use super::prompts::{
    self, IMAGE_MAX_TOKENS, RELATIONSHIP_EXPERT_SYSTEM_PROMPT, TEMPERATURE, TEXT_MAX_TOKENS,
};
use super::types::{AnalysisMode, ChatCompletion, ChatMessage, ChatRequest, ContentPart, ImageUrl, InputKind};
use crate::config::AppConfig;
use crate::input::encode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Render an inference result for display.
///
/// Success and failure share one string type; failures carry the
/// `Error: ` prefix.
pub fn render(result: &Result<String, InferenceError>) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Build the multimodal request for a screenshot.
pub fn build_image_request(config: &AppConfig, mode: AnalysisMode, image_base64: &str) -> ChatRequest {
    let prompt = prompts::build_prompt(mode, InputKind::Image);
    ChatRequest {
        model: config.vision_model.clone(),
        messages: vec![ChatMessage::user_parts(vec![
            ContentPart::Text { text: prompt },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: encode::image_data_uri(image_base64),
                },
            },
        ])],
        temperature: TEMPERATURE,
        max_tokens: IMAGE_MAX_TOKENS,
    }
}

/// Build the text-only request for an exported chat log.
pub fn build_text_request(config: &AppConfig, mode: AnalysisMode, chat_log: &str) -> ChatRequest {
    let prompt = prompts::build_prompt(mode, InputKind::TextLog);
    ChatRequest {
        model: config.text_model.clone(),
        messages: vec![
            ChatMessage::system(RELATIONSHIP_EXPERT_SYSTEM_PROMPT),
            ChatMessage::user(prompts::build_chat_log_message(&prompt, chat_log)),
        ],
        temperature: TEMPERATURE,
        max_tokens: TEXT_MAX_TOKENS,
    }
}

pub struct InferenceClient {
    config: AppConfig,
    http: reqwest::Client,
}

impl InferenceClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_base)
    }

    /// Send one request and return the completion text.
    pub async fn infer(&self, request: &ChatRequest) -> Result<String, InferenceError> {
        log::info!("[LLM] Model: {}", request.model);
        log::info!(
            "[LLM] Messages: {}, max_tokens: {}",
            request.messages.len(),
            request.max_tokens
        );

        let start = std::time::Instant::now();

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("[LLM] HTTP request failed: {}", e);
                InferenceError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[LLM] API returned {}: {}", status, body);
            return Err(InferenceError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        let completion: ChatCompletion = serde_json::from_str(&body).map_err(|e| {
            log::warn!(
                "[LLM] Failed to parse completion: {} — raw: {}",
                e,
                truncate_chars(&body, 200)
            );
            InferenceError::InvalidResponse(e.to_string())
        })?;

        if let Some(usage) = completion.usage {
            log::info!("[LLM] Input tokens: {}", usage.prompt_tokens);
            log::info!("[LLM] Output tokens: {}", usage.completion_tokens);
        }

        completion
            .first_text()
            .map(|text| text.to_string())
            .ok_or_else(|| InferenceError::InvalidResponse("No text in response".to_string()))
    }

    /// Analyze a base64-encoded screenshot.
    pub async fn analyze_image(&self, mode: AnalysisMode, image_base64: &str) -> Result<String, InferenceError> {
        let request = build_image_request(&self.config, mode, image_base64);
        self.infer(&request).await
    }

    /// Analyze a full decoded chat log.
    pub async fn analyze_chat_log(&self, mode: AnalysisMode, chat_log: &str) -> Result<String, InferenceError> {
        let request = build_text_request(&self.config, mode, chat_log);
        self.infer(&request).await
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
