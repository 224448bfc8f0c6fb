//! Request-shape tests for both analysis paths.
//!
//! Builds requests exactly as the pipeline does and checks the JSON that
//! would go over the wire. No network.

use base64::Engine;
use red_flag_lib::config::AppConfig;
use red_flag_lib::input;
use red_flag_lib::llm::prompts::{CHAT_LOG_END, CHAT_LOG_START, TEXT_MODEL, VISION_MODEL};
use red_flag_lib::llm::{build_image_request, build_text_request, AnalysisMode};

/// 1×1 pixel baseline JPEG.
const TINY_JPEG_B64: &str = "/9j/4AAQSkZJRgABAQEASABIAAD/2wBDAP//////////////////////////////////////////////////////////////////////////////////////wgALCAABAAEBAREA/8QAFBABAAAAAAAAAAAAAAAAAAAAAP/aAAgBAQABPxA=";

fn tiny_jpeg() -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .decode(TINY_JPEG_B64)
        .unwrap()
}

fn config() -> AppConfig {
    AppConfig::new("gsk_test")
}

#[test]
fn test_red_flag_screenshot_request_shape() {
    let encoded = input::encode_image(&tiny_jpeg());
    let request = build_image_request(&config(), AnalysisMode::RedFlagScan, &encoded);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["model"], VISION_MODEL);
    assert_eq!(json["max_tokens"], 1024);
    assert!((json["temperature"].as_f64().unwrap() - 0.6).abs() < 1e-6);

    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1, "image path sends exactly one message");
    assert_eq!(messages[0]["role"], "user");

    let parts = messages[0]["content"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["type"], "text");
    assert!(parts[0]["text"]
        .as_str()
        .unwrap()
        .starts_with("Note: Text may be Hinglish/Benglish."));
    assert_eq!(parts[1]["type"], "image_url");

    let url = parts[1]["image_url"]["url"].as_str().unwrap();
    assert!(url.starts_with("data:image/jpeg;base64,"));
    assert_eq!(&url["data:image/jpeg;base64,".len()..], TINY_JPEG_B64);
}

#[test]
fn test_summary_chat_log_request_shape() {
    let chat_log = "Alice: hi\nBob: hello";
    let request = build_text_request(&config(), AnalysisMode::Summary, chat_log);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["model"], TEXT_MODEL);
    assert_eq!(json["max_tokens"], 2000);

    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], "You are a relationship expert AI.");
    assert_eq!(messages[1]["role"], "user");

    let user = messages[1]["content"].as_str().unwrap();
    assert!(user.contains("Alice: hi"));
    assert!(user.contains("Bob: hello"));
    assert!(user.contains("Summarize the timeline"));
    assert!(user.contains("Ignore timestamps."));
}

#[test]
fn test_chat_log_between_markers_is_byte_identical() {
    let raw = b"12/01/2024, 21:04 - Riya: kal milte hain?\n12/01/2024, 21:05 - Arjun: dekhte hain \xf0\x9f\x98\x85\n\nlast line";
    let (chat_log, _) = input::decode_chat_log(raw).unwrap();

    for mode in AnalysisMode::ALL {
        let request = build_text_request(&config(), mode, &chat_log);
        let user = request.messages[1].text();
        let start = user.find(CHAT_LOG_START).expect("start marker") + CHAT_LOG_START.len() + 1;
        let end = user.rfind(CHAT_LOG_END).expect("end marker") - 1;
        assert!(start <= end);
        assert_eq!(user[start..end].as_bytes(), chat_log.as_bytes());
    }
}

#[test]
fn test_latin1_log_survives_into_request() {
    let (chat_log, encoding) = input::decode_chat_log(b"Jos\xe9: ol\xe1").unwrap();
    assert_eq!(encoding, input::TextEncoding::Latin1);
    let request = build_text_request(&config(), AnalysisMode::RizzRate, &chat_log);
    assert!(request.messages[1].text().contains("José: olá"));
}

#[test]
fn test_requests_are_deterministic() {
    let encoded = input::encode_image(&tiny_jpeg());
    for mode in AnalysisMode::ALL {
        assert_eq!(
            build_image_request(&config(), mode, &encoded),
            build_image_request(&config(), mode, &encoded)
        );
        assert_eq!(
            build_text_request(&config(), mode, "A: yo"),
            build_text_request(&config(), mode, "A: yo")
        );
    }
}

#[test]
fn test_model_overrides_flow_into_requests() {
    let mut config = config();
    config.vision_model = "custom-vision".to_string();
    config.text_model = "custom-text".to_string();
    assert_eq!(build_image_request(&config, AnalysisMode::Summary, "AA==").model, "custom-vision");
    assert_eq!(build_text_request(&config, AnalysisMode::Summary, "x").model, "custom-text");
}
