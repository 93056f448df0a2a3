//! Client configuration: API key and endpoint.

use crate::{
    constants::{DEFAULT_API_ENDPOINT, ENDPOINT_ENV_VAR},
    error::ConfigError,
    ApiKey,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: ApiKey,
    /// Base URL the command name is appended to. Always ends with `/`.
    pub endpoint: String,
}

impl Config {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }

    /// Build from `LOCALEATS_API_KEY` and the optional `LOCALEATS_ENDPOINT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::new(ApiKey::from_env()?);
        let config = match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(endpoint) if !endpoint.trim().is_empty() => config.with_endpoint(endpoint.trim()),
            _ => config,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        self.endpoint = endpoint;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_key.validate()?;
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        Ok(())
    }
}
