//! # valid-data-url: validate and decompose `data:` URLs
//!
//! `valid-data-url` checks strings against the RFC 2397 data URL grammar and
//! splits valid ones into their media type, content type, attributes, base64
//! flag and raw payload.
//!
//! ```
//! let url = valid_data_url::parse("data:text/plain;charset=UTF-8;base64,SGVsbG8=").unwrap();
//! assert_eq!(url.content_type(), Some("text/plain"));
//! assert_eq!(url.charset(), Some("utf-8"));
//! assert_eq!(url.to_buffer().unwrap(), b"Hello");
//!
//! assert!(!valid_data_url::validate("http://example.com"));
//! ```
//!
//! ## Features
//!
//! - Grammar built from named, individually testable sub-patterns
//! - Attributes kept in an ordered map, separate from the fixed fields
//! - Payloads are never percent-decoded
//! - Strict base64 decoding by default, with an opt-in forgiving policy
//! - Interop with [`url::Url`]

pub mod data_url;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod utils;

// Re-export commonly used types for convenience
pub use data_url::DataUrl;
pub use error::{Error, Result};
pub use parser::{Parser, ParserBuilder, ParserOptions};
pub use utils::base64::Base64Policy;

/// Check whether `input`, ignoring surrounding whitespace, is a data URL.
pub fn validate(input: &str) -> bool {
    grammar::is_match(input)
}

/// Parse `input` into its components with the default [`Parser`].
///
/// Returns [`Error::GrammarMismatch`] when `input` is not a data URL.
pub fn parse(input: &str) -> Result<DataUrl> {
    Parser::default().parse(input)
}
