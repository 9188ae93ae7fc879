mod end_to_end;

pub use justification_classifier::*;
pub use std::{path::Path, time::Duration};

/// A config pointed at `host`, reading and writing inside `dir`, with no waits.
pub fn test_config(dir: &Path, host: &str) -> ClassifierConfig {
    let mut config = ClassifierConfig::new("sk-test");
    config.input_path = dir.join("justificativas.csv");
    config.output_path = dir.join("justificativas_classificadas.csv");
    config.api_host = host.to_string();
    config.pacing_delay = Duration::ZERO;
    config.request.retry_delay = Duration::ZERO;
    config.logging.logging_enabled = false;
    config
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-it",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}
