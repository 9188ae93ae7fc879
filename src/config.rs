use crate::{
    driver::DriverConfig,
    llms::{api::openai::OPENAI_API_KEY_ENV_VAR, LlmApiConfigTrait, OpenAiConfig},
    logging::{LoggingConfig, LoggingConfigTrait},
    prompting::Language,
    requests::{RequestConfig, DEFAULT_MODEL},
};
use secrecy::{ExposeSecret, Secret};
use std::{path::PathBuf, time::Duration};

pub const INPUT_ENV_VAR: &str = "CLASSIFIER_INPUT";
pub const OUTPUT_ENV_VAR: &str = "CLASSIFIER_OUTPUT";
pub const TEXT_COLUMN_ENV_VAR: &str = "CLASSIFIER_TEXT_COLUMN";
pub const LABEL_COLUMN_ENV_VAR: &str = "CLASSIFIER_LABEL_COLUMN";
pub const MODEL_ENV_VAR: &str = "CLASSIFIER_MODEL";
pub const API_HOST_ENV_VAR: &str = "CLASSIFIER_API_HOST";
pub const LANGUAGE_ENV_VAR: &str = "CLASSIFIER_LANGUAGE";
pub const LOG_DIR_ENV_VAR: &str = "CLASSIFIER_LOG_DIR";
pub const LOG_LEVEL_ENV_VAR: &str = "CLASSIFIER_LOG_LEVEL";
pub const ORG_ID_ENV_VAR: &str = "OPENAI_ORG_ID";
pub const PROJECT_ID_ENV_VAR: &str = "OPENAI_PROJECT_ID";

pub const DEFAULT_INPUT: &str = "justificativas_200.csv";
pub const DEFAULT_OUTPUT: &str = "justificativas_classificadas.csv";
pub const DEFAULT_TEXT_COLUMN: &str = "Justificativa_processada";
pub const DEFAULT_LABEL_COLUMN: &str = "Justificativa_classificada";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing credential: set {0} in the environment or in .env")]
    MissingCredential(String),
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything a run needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub text_column: String,
    pub label_column: String,
    pub language: Language,
    pub api_host: String,
    pub api_key: Secret<String>,
    pub org_id: Option<String>,
    pub project_id: Option<String>,
    pub request: RequestConfig,
    /// Wait after every row, whether or not a request was made.
    pub pacing_delay: Duration,
    pub logging: LoggingConfig,
}

impl ClassifierConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            language: Language::default(),
            api_host: crate::llms::api::openai::OPENAI_API_HOST.to_string(),
            api_key: Secret::new(api_key.into()),
            org_id: None,
            project_id: None,
            request: RequestConfig::default(),
            pacing_delay: Duration::from_secs(2),
            logging: LoggingConfig::default(),
        }
    }

    /// Loads `.env` if present, then resolves the config from the process environment.
    pub fn from_env() -> crate::Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Resolves the config from any key lookup. Unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get(OPENAI_API_KEY_ENV_VAR)
            .ok_or_else(|| ConfigError::MissingCredential(OPENAI_API_KEY_ENV_VAR.to_string()))?;
        let mut config = Self::new(api_key);

        if let Some(input) = get(INPUT_ENV_VAR) {
            config.input_path = PathBuf::from(input);
        }
        if let Some(output) = get(OUTPUT_ENV_VAR) {
            config.output_path = PathBuf::from(output);
        }
        if let Some(column) = get(TEXT_COLUMN_ENV_VAR) {
            config.text_column = column;
        }
        if let Some(column) = get(LABEL_COLUMN_ENV_VAR) {
            config.label_column = column;
        }
        if let Some(model) = get(MODEL_ENV_VAR) {
            config.request.model = model;
        }
        if let Some(host) = get(API_HOST_ENV_VAR) {
            config.api_host = host;
        }
        if let Some(language) = get(LANGUAGE_ENV_VAR) {
            config.language = language
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: LANGUAGE_ENV_VAR,
                    value: language.clone(),
                    reason,
                })?;
        }
        if let Some(log_dir) = get(LOG_DIR_ENV_VAR) {
            config.logging.log_dir = PathBuf::from(log_dir);
        }
        if let Some(level) = get(LOG_LEVEL_ENV_VAR) {
            config.logging.level = level
                .trim()
                .parse::<tracing::Level>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: LOG_LEVEL_ENV_VAR,
                    value: level.clone(),
                    reason: e.to_string(),
                })?;
        }
        config.org_id = get(ORG_ID_ENV_VAR);
        config.project_id = get(PROJECT_ID_ENV_VAR);

        Ok(config)
    }

    pub fn openai_config(&self) -> OpenAiConfig {
        let mut config = OpenAiConfig::new()
            .with_api_host(&self.api_host)
            .with_api_key(self.api_key.expose_secret().as_str());
        if let Some(org_id) = &self.org_id {
            config = config.with_org_id(org_id);
        }
        if let Some(project_id) = &self.project_id {
            config = config.with_project_id(project_id);
        }
        config
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            text_column: self.text_column.clone(),
            label_column: self.label_column.clone(),
            pacing_delay: self.pacing_delay,
        }
    }
}

impl LoggingConfigTrait for ClassifierConfig {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_the_justification_files() {
        let config = ClassifierConfig::from_lookup(lookup(&[("API_KEY", "sk-1")])).unwrap();

        assert_eq!(config.input_path, PathBuf::from("justificativas_200.csv"));
        assert_eq!(
            config.output_path,
            PathBuf::from("justificativas_classificadas.csv")
        );
        assert_eq!(config.text_column, "Justificativa_processada");
        assert_eq!(config.label_column, "Justificativa_classificada");
        assert_eq!(config.request.model, "gpt-4o");
        assert_eq!(config.language, Language::English);
        assert_eq!(config.pacing_delay, Duration::from_secs(2));
        assert_eq!(config.api_key.expose_secret(), "sk-1");
        assert_eq!(config.org_id, None);
    }

    #[test]
    fn credential_is_required() {
        assert!(matches!(
            ClassifierConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingCredential(key)) if key == "API_KEY"
        ));
        assert!(matches!(
            ClassifierConfig::from_lookup(lookup(&[("API_KEY", "  ")])),
            Err(ConfigError::MissingCredential(_))
        ));
    }

    #[test]
    fn overrides_and_invalid_values() {
        let config = ClassifierConfig::from_lookup(lookup(&[
            ("API_KEY", "sk-1"),
            ("CLASSIFIER_INPUT", "in.csv"),
            ("CLASSIFIER_TEXT_COLUMN", "texto"),
            ("CLASSIFIER_MODEL", "gpt-4o-mini"),
            ("CLASSIFIER_LANGUAGE", "pt"),
            ("CLASSIFIER_LOG_LEVEL", "warn"),
            ("OPENAI_PROJECT_ID", "proj-7"),
        ]))
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.text_column, "texto");
        assert_eq!(config.request.model, "gpt-4o-mini");
        assert_eq!(config.language, Language::Portuguese);
        assert_eq!(config.logging.level, tracing::Level::WARN);
        assert_eq!(config.openai_config().project_id, "proj-7");

        assert!(matches!(
            ClassifierConfig::from_lookup(lookup(&[
                ("API_KEY", "sk-1"),
                ("CLASSIFIER_LANGUAGE", "klingon"),
            ])),
            Err(ConfigError::InvalidValue {
                key: "CLASSIFIER_LANGUAGE",
                ..
            })
        ));
        assert!(matches!(
            ClassifierConfig::from_lookup(lookup(&[
                ("API_KEY", "sk-1"),
                ("CLASSIFIER_LOG_LEVEL", "loud"),
            ])),
            Err(ConfigError::InvalidValue {
                key: "CLASSIFIER_LOG_LEVEL",
                ..
            })
        ));
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        std::env::set_var("API_KEY", "sk-env");
        std::env::set_var("CLASSIFIER_LABEL_COLUMN", "categoria");
        let config = ClassifierConfig::from_env().unwrap();
        std::env::remove_var("API_KEY");
        std::env::remove_var("CLASSIFIER_LABEL_COLUMN");

        assert_eq!(config.api_key.expose_secret(), "sk-env");
        assert_eq!(config.label_column, "categoria");
    }
}
