use portuguese_helper_bot::config::{Config, LlmConfig, LogsConfig, TelegramConfig};
use serde_json::{Value, json};
use teloxide::types::Message;
use tempfile::TempDir;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        telegram: TelegramConfig {
            bot_token: "123456:TEST-TOKEN".to_string(),
            api_url: None,
        },
        llm: create_llm_config("https://api.openai.com/v1"),
        logs: LogsConfig {
            level: "debug".to_string(),
            ..LogsConfig::default()
        },
    }
}

pub fn create_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        request_timeout_secs: 5,
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Body of a successful chat completion as the OpenAI API returns it
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 420,
            "completion_tokens": 80,
            "total_tokens": 500
        }
    })
}

/// Body of an API error as the OpenAI API returns it
pub fn api_error_body(message: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
}

/// A private-chat text message as the Bot API delivers it
pub fn telegram_message_json(message_id: i32, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": {
            "id": 42,
            "type": "private",
            "first_name": "Ana",
            "username": "ana"
        },
        "from": {
            "id": 42,
            "is_bot": false,
            "first_name": "Ana",
            "username": "ana"
        },
        "text": text
    })
}

/// Incoming update message, deserialized the way teloxide receives it
pub fn incoming_message(text: &str) -> Message {
    serde_json::from_value(telegram_message_json(7, text)).expect("valid Telegram message")
}

/// Successful Bot API response wrapping `result`
pub fn telegram_ok(result: Value) -> Value {
    json!({ "ok": true, "result": result })
}

/// Failed Bot API response
pub fn telegram_error(code: u16, description: &str) -> Value {
    json!({ "ok": false, "error_code": code, "description": description })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
telegram:
  bot_token: "123456:FROM-YAML"

llm:
  base_url: "http://localhost:11434/v1"
  api_key: "yaml-key"
  model: "gpt-4o-mini"
  request_timeout_secs: 20

logs:
  level: "warn"
  format: "json"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
llm:
  request_timeout_secs: "not-a-number"
"#;
