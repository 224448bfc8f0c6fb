//! Shared test helpers: a mockito server standing in for the
//! chat-completion endpoint.
//!
//! Every mock requires the bearer key and a JSON body, so a request that
//! drifts from the wire contract falls through to mockito's 501 and the
//! `assert_async` on the mock fails.

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use red_flag_lib::config::AppConfig;
use red_flag_lib::llm::InferenceClient;

pub const MOCK_KEY: &str = "gsk_mock_key";
pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Nothing listens on the discard port, so connects fail fast.
pub const DEAD_API_BASE: &str = "http://127.0.0.1:9/openai/v1";

pub async fn start_server() -> ServerGuard {
    Server::new_async().await
}

/// Config pointed at the mock server, with the API base nested like Groq's.
pub fn mock_config(server: &ServerGuard) -> AppConfig {
    AppConfig::new(MOCK_KEY).with_api_base(format!("{}/openai/v1", server.url()))
}

pub fn client_for(server: &ServerGuard) -> InferenceClient {
    InferenceClient::new(mock_config(server))
}

/// Mock one completions call whose body satisfies `body`.
pub async fn mock_completion(
    server: &mut ServerGuard,
    body: Matcher,
    status: usize,
    response: &str,
) -> Mock {
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_header("authorization", format!("Bearer {}", MOCK_KEY).as_str())
        .match_header("content-type", "application/json")
        .match_body(body)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(response)
        .create_async()
        .await
}

/// A completion body in the OpenAI-compatible shape.
pub fn completion_body(text: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
    })
    .to_string()
}
