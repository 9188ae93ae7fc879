use crate::{
    llms::api::ClientError,
    requests::{CompletionRequest, CompletionResponse, TokenUsage},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Default, Debug, Deserialize, PartialEq)]
pub struct OpenAiCompletionRequest {
    /// ID of the model to use.
    pub model: String,

    /// The conversation so far. Classification sends a single user message.
    pub messages: Vec<CompletionRequestMessage>,

    /// Format the model must output. Plain text for classification.
    pub response_format: ResponseFormat,

    /// What sampling temperature to use, between 0 and 2.
    pub temperature: f32,

    /// Nucleus sampling mass, between 0 and 1.
    pub top_p: f32,

    /// Number between -2.0 and 2.0.
    pub frequency_penalty: f32,

    /// Number between -2.0 and 2.0.
    pub presence_penalty: f32,
}

impl OpenAiCompletionRequest {
    pub fn new(req: &CompletionRequest) -> Self {
        OpenAiCompletionRequest {
            model: req.config.model.clone(),
            messages: vec![CompletionRequestMessage {
                role: "user".to_string(),
                content: req.prompt.clone(),
            }],
            response_format: ResponseFormat::default(),
            temperature: req.config.temperature,
            top_p: req.config.top_p,
            frequency_penalty: req.config.frequency_penalty,
            presence_penalty: req.config.presence_penalty,
        }
    }
}

#[derive(Clone, Serialize, Debug, Deserialize, PartialEq)]
pub struct CompletionRequestMessage {
    pub role: String,
    pub content: String,
}

#[derive(Clone, Serialize, Debug, Deserialize, PartialEq)]
pub struct ResponseFormat {
    pub r#type: String,
}

impl Default for ResponseFormat {
    fn default() -> Self {
        Self {
            r#type: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiCompletionResponse {
    pub id: String,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatCompletionResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    pub role: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionResponse {
    pub fn new_from_openai(res: OpenAiCompletionResponse) -> Result<Self, ClientError> {
        let choice = res
            .choices
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse)?;
        let content = choice.message.content.ok_or(ClientError::EmptyResponse)?;
        let token_usage = match res.usage {
            Some(usage) => TokenUsage {
                prompt_tokens: Some(usage.prompt_tokens),
                completion_tokens: Some(usage.completion_tokens),
                total_tokens: Some(usage.total_tokens),
            },
            None => TokenUsage::default(),
        };
        Ok(Self {
            id: res.id,
            content: content.trim().to_owned(),
            finish_reason: choice.finish_reason,
            token_usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::RequestConfig;

    #[test]
    fn request_carries_classification_sampling() {
        let req = CompletionRequest::new("classify this", RequestConfig::default());
        let body = serde_json::to_value(OpenAiCompletionRequest::new(&req)).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "classify this");
        assert_eq!(body["response_format"]["type"], "text");
        assert_eq!(body["top_p"], 1.0);
        assert_eq!(body["frequency_penalty"], 0.0);
        assert_eq!(body["presence_penalty"], 0.0);
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn response_takes_trimmed_first_choice() {
        let raw = serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  Machine Downtime\n"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "Employee Substitution"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 3, "total_tokens": 123}
        });
        let res: OpenAiCompletionResponse = serde_json::from_value(raw).unwrap();
        let res = CompletionResponse::new_from_openai(res).unwrap();

        assert_eq!(res.content, "Machine Downtime");
        assert_eq!(res.finish_reason.as_deref(), Some("stop"));
        assert_eq!(res.token_usage.total_tokens, Some(123));
    }

    #[test]
    fn response_without_content_is_an_error() {
        let raw = serde_json::json!({
            "id": "chatcmpl-2",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": null}, "finish_reason": "stop"}
            ]
        });
        let res: OpenAiCompletionResponse = serde_json::from_value(raw).unwrap();
        assert!(matches!(
            CompletionResponse::new_from_openai(res),
            Err(ClientError::EmptyResponse)
        ));

        let raw = serde_json::json!({"id": "chatcmpl-3", "choices": []});
        let res: OpenAiCompletionResponse = serde_json::from_value(raw).unwrap();
        assert!(matches!(
            CompletionResponse::new_from_openai(res),
            Err(ClientError::EmptyResponse)
        ));
    }
}
