pub mod completion;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait, LlmApiConfigTrait},
    error::ClientError,
};
use crate::{
    llms::CompletionBackend,
    requests::{CompletionRequest, CompletionResponse},
};
use completion::{OpenAiCompletionRequest, OpenAiCompletionResponse};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

/// Default v1 API base url
pub const OPENAI_API_HOST: &str = "https://api.openai.com/v1";
/// Environment variable the credential is read from
pub const OPENAI_API_KEY_ENV_VAR: &str = "API_KEY";
/// Organization header
pub const OPENAI_ORGANIZATION_HEADER: &str = "OpenAI-Organization";
/// Project header
pub const OPENAI_PROJECT_HEADER: &str = "OpenAI-Project";

pub struct OpenAiBackend {
    pub(crate) client: ApiClient<OpenAiConfig>,
}

impl OpenAiBackend {
    /// Builds the client once. Fails when no credential was set.
    pub fn new(config: OpenAiConfig) -> crate::Result<Self> {
        config.api_config().require_api_key()?;
        crate::debug!("OpenAI backend targeting {}", config.api_config().host);
        Ok(Self {
            client: ApiClient::new(config),
        })
    }
}

impl CompletionBackend for OpenAiBackend {
    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, ClientError> {
        let res: OpenAiCompletionResponse = self
            .client
            .post("/chat/completions", OpenAiCompletionRequest::new(request))
            .await?;
        let res = CompletionResponse::new_from_openai(res)?;
        crate::trace!("{}", res);
        Ok(res)
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_config: ApiConfig,
    pub org_id: String,
    pub project_id: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: OPENAI_API_HOST.to_string(),
                api_key: None,
            },
            org_id: Default::default(),
            project_id: Default::default(),
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// To use a different organization id other than default
    pub fn with_org_id<S: Into<String>>(mut self, org_id: S) -> Self {
        self.org_id = org_id.into();
        self
    }

    /// Non default project id
    pub fn with_project_id<S: Into<String>>(mut self, project_id: S) -> Self {
        self.project_id = project_id.into();
        self
    }
}

impl LlmApiConfigTrait for OpenAiConfig {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.api_config
    }
}

impl ApiConfigTrait for OpenAiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if !self.org_id.is_empty() {
            if let Ok(header_value) = HeaderValue::from_str(self.org_id.as_str()) {
                headers.insert(OPENAI_ORGANIZATION_HEADER, header_value);
            } else {
                crate::error!("Failed to create header value from org_id value");
            }
        }
        if !self.project_id.is_empty() {
            if let Ok(header_value) = HeaderValue::from_str(self.project_id.as_str()) {
                headers.insert(OPENAI_PROJECT_HEADER, header_value);
            } else {
                crate::error!("Failed to create header value from project_id value");
            }
        }
        if let Some(api_key) = self.api_key() {
            if let Ok(header_value) =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            {
                headers.insert(AUTHORIZATION, header_value);
            } else {
                crate::error!("Failed to create header value from authorization value");
            }
        }

        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_config.host.trim_end_matches('/'), path)
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }
}
