// Public modules
pub mod api;

// Internal imports
use crate::requests::{CompletionRequest, CompletionResponse};

// Public exports
pub use api::{
    openai::{OpenAiBackend, OpenAiConfig},
    ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
};

/// A remote service able to answer a single completion request.
///
/// Implementations perform exactly one call per invocation. Retrying is the
/// caller's business, so an implementation must not retry on its own.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, ClientError>;
}
