//! Per-session chat log storage.
//!
//! Holds the decoded chat log between the upload (preview) step and the
//! analyze step so the file isn't read twice. At most one log per
//! session; a new upload replaces the old one. Nothing is written to disk.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Thread-safe map of session → most recently uploaded chat log.
#[derive(Default)]
pub struct SessionStore {
    chat_logs: Mutex<HashMap<SessionId, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session's chat log, replacing any previous one.
    pub fn store_chat_log(&self, session: &SessionId, chat_log: String) -> Result<(), String> {
        let mut logs = self.chat_logs.lock().map_err(|e| e.to_string())?;
        let replaced = logs.insert(session.clone(), chat_log).is_some();
        log::info!(
            "[SESSION] {} chat log for session {}",
            if replaced { "Replaced" } else { "Stored" },
            session
        );
        Ok(())
    }

    /// Copy of the session's chat log, if one was uploaded.
    pub fn chat_log(&self, session: &SessionId) -> Result<Option<String>, String> {
        let logs = self.chat_logs.lock().map_err(|e| e.to_string())?;
        Ok(logs.get(session).cloned())
    }

    /// Drop everything held for a session.
    pub fn end_session(&self, session: &SessionId) -> Result<(), String> {
        let mut logs = self.chat_logs.lock().map_err(|e| e.to_string())?;
        if logs.remove(session).is_some() {
            log::info!("[SESSION] Cleared session {}", session);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.chat_logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
