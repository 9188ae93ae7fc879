#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod llms;
pub mod logging;
pub mod prompting;
pub mod requests;

pub use classifier::{Classification, ClassificationOutcome, JustificationClassifier};
pub use config::{ClassifierConfig, ConfigError};
pub use dataset::{Dataset, DatasetError};
pub use driver::{classify_dataset, run, run_with_backend, DriverConfig, RunSummary};
pub use llms::{
    ApiConfig, ApiError, ClientError, CompletionBackend, LlmApiConfigTrait, OpenAiBackend,
    OpenAiConfig,
};
pub use logging::{LoggingConfig, LoggingConfigTrait};
pub use prompting::{Category, Language};
pub use requests::{CompletionRequest, CompletionResponse, RequestConfig, RequestConfigTrait};
