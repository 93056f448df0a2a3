use std::fmt;

use crate::{constants::API_KEY_ENV_VAR, error::ConfigError};

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// From a raw API key string.
    pub fn from_raw(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }

    /// Read the API key from `LOCALEATS_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(API_KEY_ENV_VAR)
    }

    /// Read the API key from the given environment variable.
    pub fn from_env_var(name: &'static str) -> Result<Self, ConfigError> {
        let key = std::env::var(name).map_err(|_| ConfigError::MissingApiKey(name))?;
        let key = Self::from_raw(key.trim());
        key.validate()?;
        Ok(key)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(())
    }

    pub fn get(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey").field("key", &"<redacted>").finish()
    }
}
