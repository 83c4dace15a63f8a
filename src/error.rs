//! Error types for data URL parsing

use thiserror::Error;

/// Errors that can occur while validating, parsing or materializing a data URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not conform to the data URL grammar
    #[error("Not a valid data URL")]
    GrammarMismatch,

    /// The payload is flagged as base64 but could not be decoded
    #[error("Payload decode error: {0}")]
    PayloadDecodeError(String),

    /// A `url::Url` could not be used as a data URL
    #[error("Invalid URL: {0}")]
    UrlError(String),
}

/// Result type using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::PayloadDecodeError(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::UrlError(err.to_string())
    }
}
