use thiserror::Error;

use crate::model::RestaurantBuilderError;

/// Failure of a remote operation.
///
/// Either carries a plain message (`Message`) or wraps the lower level cause,
/// which stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{0}")]
    Message(String),
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("server error (HTTP {0})")]
    ResponseError(reqwest::StatusCode),
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("the response body was empty")]
    EmptyResponse,
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("unable to translate response object: {0}")]
    TranslateError(#[from] RestaurantBuilderError),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

impl DataError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("the filter option name must not be empty")]
    EmptyName,
    #[error("the value added to filter option `{0}` must not be empty")]
    EmptyValue(String),
    #[error("the command name must not be empty")]
    EmptyCommand,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key configured (set {0})")]
    MissingApiKey(&'static str),
    #[error("the API key must not be empty")]
    EmptyApiKey,
    #[error("invalid endpoint `{0}`: must start with http:// or https://")]
    InvalidEndpoint(String),
    #[error("unable to build the HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("the restaurant has no image")]
    MissingImage,
    #[error("the image request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the image request failed with status code: {0}")]
    ResponseError(reqwest::StatusCode),
    #[error("unable to write the file: {0}")]
    WriteError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn message_error_displays_message() {
        let err = DataError::message("No state information available.");
        assert_eq!(err.to_string(), "No state information available.");
        assert!(err.source().is_none());
    }

    #[test]
    fn wrapped_error_keeps_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let cause_text = cause.to_string();

        let err = DataError::from(cause);

        assert!(matches!(err, DataError::ParseError(_)));
        assert_eq!(err.source().unwrap().to_string(), cause_text);
    }

    #[test]
    fn invalid_argument_passes_through_transparently() {
        let err = DataError::from(InvalidArgument::EmptyCommand);
        assert_eq!(err.to_string(), InvalidArgument::EmptyCommand.to_string());
    }
}
