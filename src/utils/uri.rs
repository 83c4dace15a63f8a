//! URI interop utilities
//!
//! This module lets callers that already hold a [`url::Url`] run it through the
//! data URL grammar.

use std::convert::TryFrom;

use url::Url;

use crate::data_url::DataUrl;
use crate::error::Error;
use crate::parser::Parser;

/// Check if a URL uses the `data` scheme
pub fn is_data_scheme(url: &Url) -> bool {
    url.scheme() == "data"
}

/// Parse an already-parsed URL as a data URL
pub fn parse_url(parser: &Parser, url: &Url) -> Result<DataUrl, Error> {
    if !is_data_scheme(url) {
        return Err(Error::UrlError(format!(
            "Expected a data: URL, got scheme `{}`",
            url.scheme()
        )));
    }

    parser.parse(url.as_str())
}

/// Parse a string with the `url` crate first, then as a data URL
pub fn parse_url_str(parser: &Parser, input: &str) -> Result<DataUrl, Error> {
    let url = Url::parse(input.trim())?;
    parse_url(parser, &url)
}

impl TryFrom<&Url> for DataUrl {
    type Error = Error;

    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        parse_url(&Parser::default(), url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_data_scheme() {
        assert!(is_data_scheme(&Url::parse("data:,x").unwrap()));
        assert!(is_data_scheme(&Url::parse("DATA:,x").unwrap()));
        assert!(!is_data_scheme(&Url::parse("http://example.com").unwrap()));
    }

    #[test]
    fn test_try_from_url() {
        let url = Url::parse("data:text/plain;base64,SGVsbG8=").unwrap();
        let parsed = DataUrl::try_from(&url).unwrap();
        assert_eq!(parsed.content_type(), Some("text/plain"));
        assert!(parsed.is_base64());
        assert_eq!(parsed.to_buffer().unwrap(), b"Hello");
    }

    #[test]
    fn test_non_data_scheme() {
        let url = Url::parse("http://example.com/a.png").unwrap();
        let err = DataUrl::try_from(&url).unwrap_err();
        assert!(matches!(err, Error::UrlError(_)));
    }

    #[test]
    fn test_fragment_is_rejected_by_grammar() {
        let url = Url::parse("data:,Hello#frag").unwrap();
        assert_eq!(DataUrl::try_from(&url).unwrap_err(), Error::GrammarMismatch);
    }

    #[test]
    fn test_parse_url_str() {
        let parser = Parser::default();
        assert!(parse_url_str(&parser, "data:,Hello").is_ok());
        assert!(matches!(
            parse_url_str(&parser, "not a url"),
            Err(Error::UrlError(_))
        ));
    }
}
