use crate::error::ConfigError;

/// HTTP client with compressed responses enabled.
pub fn default_http_client() -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(ConfigError::HttpClient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_client() {
        assert!(default_http_client().is_ok());
    }
}
