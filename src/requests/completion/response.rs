pub struct CompletionResponse {
    /// A unique identifier for the chat completion.
    pub id: String,
    /// The generated completion, taken from the first choice.
    pub content: String,
    /// The reason the model stopped generating, as reported by the API.
    pub finish_reason: Option<String>,
    pub token_usage: TokenUsage,
}

impl std::fmt::Display for CompletionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionResponse:")?;
        writeln!(f, "    id: {}", self.id)?;
        writeln!(f, "    content: {:?}", self.content)?;
        writeln!(f, "    finish_reason: {:?}", self.finish_reason)?;
        write!(f, "    token_usage: {}", self.token_usage)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

impl std::fmt::Display for TokenUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "prompt: {:?}, completion: {:?}, total: {:?}",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}
