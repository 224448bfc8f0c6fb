//! LLM domain — prompt selection and the inference round trip.
//!
//! Public API for the analysis layer.
//! External code should only use the items exported here.
//!
//!   - types.rs    — AnalysisMode, InputKind, chat-completion wire types
//!   - prompts.rs  — mode × input-kind prompt table, model + sampling constants
//!   - client.rs   — request builders, InferenceClient, InferenceError
//!   - provider.rs — provider metadata + keychain access

pub mod client;
pub mod prompts;
pub mod provider;
pub mod types;

pub use client::{build_image_request, build_text_request, render, InferenceClient, InferenceError};
pub use prompts::{build_chat_log_message, build_prompt};
pub use types::{AnalysisMode, ChatRequest, InputKind};
