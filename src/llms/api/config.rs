use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, Secret};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base url of the API, scheme included, e.g. `https://api.openai.com/v1`.
    pub host: String,
    pub api_key: Option<Secret<String>>,
}

impl ApiConfig {
    /// The credential is resolved by the caller; a missing or blank key is an error here.
    pub(crate) fn require_api_key(&self) -> crate::Result<()> {
        match self.api_key.as_ref() {
            Some(api_key) if !api_key.expose_secret().trim().is_empty() => Ok(()),
            _ => crate::bail!("No api_key set for {}", self.host),
        }
    }
}

pub trait LlmApiConfigTrait {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig;

    fn api_config(&self) -> &ApiConfig;

    fn with_api_host<S: AsRef<str>>(mut self, host: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().host = host.as_ref().trim_end_matches('/').to_string();
        self
    }

    fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key = Some(Secret::from(api_key.into()));
        self
    }
}

pub(crate) trait ApiConfigTrait {
    fn headers(&self) -> HeaderMap;

    fn url(&self, path: &str) -> String;

    fn api_key(&self) -> &Option<Secret<String>>;
}
