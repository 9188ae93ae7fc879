use crate::{
    llms::CompletionBackend,
    prompting::{Category, Language},
    requests::{CompletionRequest, RequestConfig, RequestConfigTrait},
};

/// Placeholders that carry no information and are never sent to the model.
const PLACEHOLDER_TEXTS: [&str; 3] = ["", ".", "*"];

/// How a single classification was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// Empty or placeholder text; no request was made.
    FastPath,
    /// The model answered. `on_list` is false when the answer is not one of the
    /// known categories; the answer is kept as-is either way.
    Classified { on_list: bool },
    /// Every attempt failed.
    Exhausted { attempts: u8 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub label: String,
    pub outcome: ClassificationOutcome,
}

/// Classifies one justification at a time against a remote completion backend.
pub struct JustificationClassifier<B: CompletionBackend> {
    pub backend: std::sync::Arc<B>,
    pub config: RequestConfig,
    pub language: Language,
}

impl<B: CompletionBackend> JustificationClassifier<B> {
    pub fn new(backend: std::sync::Arc<B>) -> Self {
        Self {
            backend,
            config: RequestConfig::default(),
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_request_config(mut self, config: RequestConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the label for `text`. Never fails: remote errors are retried and,
    /// once attempts run out, reported through the returned string.
    pub async fn classify(&self, text: Option<&str>) -> String {
        self.classify_with_outcome(text).await.label
    }

    pub async fn classify_with_outcome(&self, text: Option<&str>) -> Classification {
        let text = match text.map(str::trim) {
            Some(text) if !PLACEHOLDER_TEXTS.contains(&text) => text,
            _ => {
                crate::debug!("Skipping empty or placeholder text");
                return Classification {
                    label: self.language.not_classified_label().to_string(),
                    outcome: ClassificationOutcome::FastPath,
                };
            }
        };

        let request = CompletionRequest::new(
            self.language.classification_prompt(text),
            self.config.clone(),
        );
        crate::trace!("{}", request);
        let max_attempts = self.config.retry_after_fail_n_times;
        let mut attempt: u8 = 0;

        while attempt < max_attempts {
            attempt += 1;
            match self.backend.completion_request(&request).await {
                Ok(res) => {
                    let label = res.content.trim().to_owned();
                    let on_list = Category::from_label(&label, self.language).is_some();
                    if !on_list {
                        crate::warn!("Answer {label:?} for {text:?} is not a known category");
                    }
                    return Classification {
                        label,
                        outcome: ClassificationOutcome::Classified { on_list },
                    };
                }
                Err(e) => {
                    if attempt < max_attempts {
                        crate::warn!(
                            "Attempt {attempt} failed: {e}. Retrying in {} seconds...",
                            self.config.retry_delay.as_secs_f32()
                        );
                        tokio::time::sleep(self.config.retry_delay).await;
                    } else {
                        crate::warn!("Attempt {attempt} failed: {e}");
                    }
                }
            }
        }

        crate::error!("Giving up on {text:?} after {attempt} attempts");
        Classification {
            label: self.language.exhausted_label(attempt),
            outcome: ClassificationOutcome::Exhausted { attempts: attempt },
        }
    }
}

impl<B: CompletionBackend> RequestConfigTrait for JustificationClassifier<B> {
    fn config(&mut self) -> &mut RequestConfig {
        &mut self.config
    }
}
