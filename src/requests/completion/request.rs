use crate::requests::req_components::RequestConfig;

/// A one-shot completion: a single user message plus the sampling settings
/// it is sent with.
#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub prompt: String,
    pub config: RequestConfig,
}

impl CompletionRequest {
    pub fn new<S: Into<String>>(prompt: S, config: RequestConfig) -> CompletionRequest {
        CompletionRequest {
            prompt: prompt.into(),
            config,
        }
    }
}

impl std::fmt::Display for CompletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionRequest:")?;
        writeln!(f, "  prompt: {:?}", self.prompt)?;
        write!(f, "  config: {}", self.config)
    }
}
