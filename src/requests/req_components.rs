use std::time::Duration;

/// Default model used for classification requests.
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Clone, Debug, PartialEq)]
pub struct RequestConfig {
    /// ID of the model to use.
    ///
    /// Defaults to [`DEFAULT_MODEL`].
    pub model: String,
    /// Controls the randomness of the model's output.
    ///
    /// Accepts values between 0.0 and 2.0. Lower values give more focused and
    /// deterministic responses, which is what a closed-set classifier wants.
    ///
    /// Defaults to `0.3`.
    pub temperature: f32,
    /// Controls diversity via nucleus sampling.
    ///
    /// Only the tokens comprising the top `top_p` probability mass are considered.
    /// `1.0` keeps the full distribution.
    ///
    /// Accepts values between 0.0 and 1.0.
    ///
    /// Defaults to `1.0`.
    pub top_p: f32,
    /// Adjusts token selection based on their frequency in the generated text.
    ///
    /// Accepts values between -2.0 and 2.0.
    ///
    /// Defaults to `0.0` (no frequency penalty applied).
    pub frequency_penalty: f32,
    /// Adjusts token selection based on their presence in the generated text.
    ///
    /// Accepts values between -2.0 and 2.0.
    ///
    /// Defaults to `0.0` (no presence penalty applied).
    pub presence_penalty: f32,
    /// Maximum number of attempts for a single classification.
    ///
    /// Every client error counts as a failed attempt, no matter its kind.
    ///
    /// Defaults to `3`.
    pub retry_after_fail_n_times: u8,
    /// Fixed wait between a failed attempt and the next one.
    ///
    /// Defaults to 5 seconds.
    pub retry_delay: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            retry_after_fail_n_times: 3,
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl RequestConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

pub trait RequestConfigTrait {
    fn config(&mut self) -> &mut RequestConfig;

    /// Sets the value of [RequestConfig::model].
    fn model<S: Into<String>>(&mut self, model: S) -> &mut Self {
        self.config().model = model.into();
        self
    }

    /// Sets the value of [RequestConfig::frequency_penalty].
    fn frequency_penalty(&mut self, frequency_penalty: f32) -> &mut Self {
        match frequency_penalty {
            value if (-2.0..=2.0).contains(&value) => self.config().frequency_penalty = value,
            _ => self.config().frequency_penalty = 0.0,
        };
        self
    }

    /// Sets the value of [RequestConfig::presence_penalty].
    fn presence_penalty(&mut self, presence_penalty: f32) -> &mut Self {
        match presence_penalty {
            value if (-2.0..=2.0).contains(&value) => self.config().presence_penalty = value,
            _ => self.config().presence_penalty = 0.0,
        };
        self
    }

    /// Sets the value of [RequestConfig::temperature].
    fn temperature(&mut self, temperature: f32) -> &mut Self {
        match temperature {
            value if (0.0..=2.0).contains(&value) => self.config().temperature = value,
            _ => self.config().temperature = 0.3,
        };
        self
    }

    /// Sets the value of [RequestConfig::top_p].
    fn top_p(&mut self, top_p: f32) -> &mut Self {
        match top_p {
            value if (0.0..=1.0).contains(&value) => self.config().top_p = value,
            _ => self.config().top_p = 1.0,
        };
        self
    }

    /// Sets the value of [RequestConfig::retry_after_fail_n_times].
    fn retry_after_fail_n_times(&mut self, retry_after_fail_n_times: u8) -> &mut Self {
        self.config().retry_after_fail_n_times = retry_after_fail_n_times;
        self
    }

    /// Sets the value of [RequestConfig::retry_delay].
    fn retry_delay(&mut self, retry_delay: Duration) -> &mut Self {
        self.config().retry_delay = retry_delay;
        self
    }
}

impl std::fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "    model: {}", self.model)?;
        writeln!(f, "    frequency_penalty: {:?}", self.frequency_penalty)?;
        writeln!(f, "    presence_penalty: {:?}", self.presence_penalty)?;
        writeln!(f, "    temperature: {:?}", self.temperature)?;
        writeln!(f, "    top_p: {:?}", self.top_p)?;
        writeln!(
            f,
            "    retry_after_fail_n_times: {:?}",
            self.retry_after_fail_n_times
        )?;
        write!(f, "    retry_delay: {:?}", self.retry_delay)
    }
}
