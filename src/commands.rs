//! Tauri command handlers for the desktop shell.
//!
//! Thin wrappers that bridge frontend invoke() calls to the pipeline.
//! The calling window's label is the session id, so each window keeps its
//! own uploaded chat log.

use crate::llm::provider;
use crate::llm::{AnalysisMode, InferenceClient};
use crate::pipeline::{self, Analysis};
use crate::session::{SessionId, SessionStore};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOption {
    pub id: &'static str,
    pub label: &'static str,
}

fn session_of(window: &tauri::Window) -> SessionId {
    SessionId::new(window.label())
}

/// Tauri command: the modes for the sidebar radio group, default first.
#[tauri::command]
pub fn list_modes() -> Vec<ModeOption> {
    AnalysisMode::ALL
        .into_iter()
        .map(|mode| ModeOption {
            id: mode.id(),
            label: mode.label(),
        })
        .collect()
}

/// Tauri command: scan an uploaded screenshot.
///
/// The frontend sends the file name (for the extension filter) and bytes.
#[tauri::command]
pub async fn scan_image(
    client: tauri::State<'_, InferenceClient>,
    mode: String,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<Analysis, String> {
    let mode: AnalysisMode = mode.parse()?;
    match crate::input::kind_for_file_name(&file_name).map_err(|e| e.to_string())? {
        crate::llm::InputKind::Image => pipeline::scan_image(&client, mode, &bytes)
            .await
            .map_err(|e| e.to_string()),
        crate::llm::InputKind::TextLog => {
            Err(format!("{} is a chat export — use the text tab", file_name))
        }
    }
}

/// Tauri command: decode and remember a chat export, return its preview.
#[tauri::command]
pub fn upload_chat_log(
    window: tauri::Window,
    sessions: tauri::State<'_, SessionStore>,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<String, String> {
    pipeline::upload_chat_log(&sessions, &session_of(&window), &file_name, bytes)
        .map_err(|e| e.to_string())
}

/// Tauri command: analyze the chat export uploaded from this window.
#[tauri::command]
pub async fn analyze_chat_log(
    window: tauri::Window,
    client: tauri::State<'_, InferenceClient>,
    sessions: tauri::State<'_, SessionStore>,
    mode: String,
) -> Result<Analysis, String> {
    let mode: AnalysisMode = mode.parse()?;
    pipeline::analyze_chat_log(&client, &sessions, &session_of(&window), mode)
        .await
        .map_err(|e| e.to_string())
}

/// Tauri command: forget this window's uploaded chat log.
#[tauri::command]
pub fn end_session(
    window: tauri::Window,
    sessions: tauri::State<'_, SessionStore>,
) -> Result<(), String> {
    sessions.end_session(&session_of(&window))
}

/// Tauri command: save an API key to the OS keychain.
///
/// Takes effect on next launch; the running client keeps its config.
#[tauri::command]
pub fn save_api_key(api_key: String) -> Result<(), String> {
    if api_key.trim().is_empty() {
        return Err("API key is empty".to_string());
    }
    provider::save_keychain_key(&provider::groq(), api_key.trim())
}

/// Tauri command: remove the stored API key from the OS keychain.
#[tauri::command]
pub fn delete_api_key() -> Result<(), String> {
    provider::delete_keychain_key(&provider::groq())
}
