// Internal modules
mod completion;
mod req_components;

// Public exports
pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use req_components::{RequestConfig, RequestConfigTrait, DEFAULT_MODEL};
