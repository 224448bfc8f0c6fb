//! Analysis pipeline — the dual-path dispatcher.
//!
//! - scan_image:        screenshot bytes → base64 → vision request → Analysis
//! - upload_chat_log:   export bytes → decode → session store → preview
//! - analyze_chat_log:  stored log → text request → Analysis
//!
//! Exactly one input kind per analysis. Inference failures do not abort the
//! pipeline: they come back as an `Analysis` whose text starts with
//! `Error: `. Only caller mistakes (no upload, empty image) are `Err`.

use crate::input::{self, InputPayload, UploadError};
use crate::llm::client::{self, InferenceClient};
use crate::llm::types::{AnalysisMode, InputKind};
use crate::session::{SessionId, SessionStore};
use crate::verdict::{self, Verdict};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No chat log uploaded for session {0} — upload a .txt export first")]
    NoChatLog(SessionId),
    #[error("No image data — upload a screenshot first")]
    EmptyImage,
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("Session store unavailable: {0}")]
    Session(String),
}

/// Everything the presentation layer needs to render one verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub mode: AnalysisMode,
    pub input_kind: InputKind,
    /// Model output, or `Error: ...` when the call failed.
    pub text: String,
    pub verdict: Verdict,
    pub failed: bool,
}

impl Analysis {
    fn from_result(
        mode: AnalysisMode,
        input_kind: InputKind,
        result: Result<String, client::InferenceError>,
    ) -> Self {
        let failed = result.is_err();
        let text = client::render(&result);
        let verdict = verdict::classify(&text);
        log::info!(
            "[PIPELINE] {:?}/{:?} → {:?}{}",
            mode,
            input_kind,
            verdict,
            if failed { " (inference failed)" } else { "" }
        );
        Self {
            mode,
            input_kind,
            text,
            verdict,
            failed,
        }
    }
}

/// Analyze a screenshot.
pub async fn scan_image(
    client: &InferenceClient,
    mode: AnalysisMode,
    image: &[u8],
) -> Result<Analysis, PipelineError> {
    if image.is_empty() {
        return Err(PipelineError::EmptyImage);
    }
    let start = std::time::Instant::now();
    let image_base64 = input::encode_image(image);
    log::info!(
        "[PIPELINE] Encoded {} image bytes → {} base64 chars",
        image.len(),
        image_base64.len()
    );

    let result = client.analyze_image(mode, &image_base64).await;
    let analysis = Analysis::from_result(mode, InputKind::Image, result);
    log::info!("[PIPELINE] Image scan total: {}ms", start.elapsed().as_millis());
    Ok(analysis)
}

/// Decode an uploaded chat export, remember it for the session, and return
/// the preview shown before the user confirms.
pub fn upload_chat_log(
    sessions: &SessionStore,
    session: &SessionId,
    file_name: &str,
    raw: Vec<u8>,
) -> Result<String, PipelineError> {
    match input::payload_from_upload(file_name, raw)? {
        InputPayload::TextLog(chat_log) => {
            let preview = input::preview(&chat_log);
            sessions
                .store_chat_log(session, chat_log)
                .map_err(PipelineError::Session)?;
            Ok(preview)
        }
        InputPayload::Image(_) => Err(PipelineError::Upload(UploadError::UnsupportedExtension(
            file_name.to_string(),
        ))),
    }
}

/// Analyze the chat log previously stored for `session`.
pub async fn analyze_chat_log(
    client: &InferenceClient,
    sessions: &SessionStore,
    session: &SessionId,
    mode: AnalysisMode,
) -> Result<Analysis, PipelineError> {
    let chat_log = sessions
        .chat_log(session)
        .map_err(PipelineError::Session)?
        .ok_or_else(|| PipelineError::NoChatLog(session.clone()))?;

    let start = std::time::Instant::now();
    log::info!(
        "[PIPELINE] Analyzing chat log for session {} ({} chars)",
        session,
        chat_log.chars().count()
    );
    let result = client.analyze_chat_log(mode, &chat_log).await;
    let analysis = Analysis::from_result(mode, InputKind::TextLog, result);
    log::info!("[PIPELINE] Chat log analysis total: {}ms", start.elapsed().as_millis());
    Ok(analysis)
}

/// One-shot analysis of a payload, without the session step.
pub async fn analyze(
    client: &InferenceClient,
    mode: AnalysisMode,
    payload: &InputPayload,
) -> Result<Analysis, PipelineError> {
    match payload {
        InputPayload::Image(bytes) => scan_image(client, mode, bytes).await,
        InputPayload::TextLog(chat_log) => {
            let result = client.analyze_chat_log(mode, chat_log).await;
            Ok(Analysis::from_result(mode, InputKind::TextLog, result))
        }
    }
}
