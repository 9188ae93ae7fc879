// Internal modules
mod request;
mod response;

// Public exports
pub use request::CompletionRequest;
pub use response::{CompletionResponse, TokenUsage};
