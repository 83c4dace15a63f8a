//! Decomposition of validated data URLs
//!
//! A [`Parser`] runs the grammar once and splits the captured groups into a
//! [`DataUrl`]. Decomposition cannot fail after the grammar has matched.

pub mod builder;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::data_url::DataUrl;
use crate::error::{Error, Result};
use crate::grammar::{self, BASE64_GROUP, DATA_GROUP, MEDIA_TYPE_GROUP};
use crate::utils::base64::Base64Policy;

pub use self::builder::ParserBuilder;

/// Attribute whose value keeps its original casing.
const NAME_ATTRIBUTE: &str = "name";

/// Options controlling how data URLs are decomposed and decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Decoder used by [`DataUrl::to_buffer`] for base64 payloads
    pub base64_policy: Base64Policy,
    /// Keep the original casing of `name` attribute values
    pub preserve_name_case: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            base64_policy: Base64Policy::Strict,
            preserve_name_case: true,
        }
    }
}

/// Validates and decomposes data URLs
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Start building a parser
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    /// The options this parser was built with
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Check whether `input` is a data URL
    pub fn validate(&self, input: &str) -> bool {
        grammar::is_match(input)
    }

    /// Parse `input` into its components.
    ///
    /// Returns [`Error::GrammarMismatch`] if `input` is not a data URL.
    pub fn parse(&self, input: &str) -> Result<DataUrl> {
        let caps = match grammar::captures(input) {
            Some(caps) => caps,
            None => {
                debug!("Rejected {} byte input: not a data URL", input.len());
                return Err(Error::GrammarMismatch);
            }
        };

        let mut parsed = DataUrl {
            media_type: None,
            content_type: None,
            attributes: IndexMap::new(),
            base64: caps.name(BASE64_GROUP).map_or(false, |m| !m.as_str().is_empty()),
            data: caps
                .name(DATA_GROUP)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            base64_policy: self.options.base64_policy,
        };

        if let Some(media_type) = caps.name(MEDIA_TYPE_GROUP) {
            let segments = self.normalize_segments(media_type.as_str());
            let mut segments_iter = segments.iter();

            parsed.content_type = segments_iter.next().cloned();
            for segment in segments_iter {
                if let Some((key, value)) = segment.split_once('=') {
                    trace!("Attribute {}={}", key, value);
                    parsed.attributes.insert(key.to_string(), value.to_string());
                }
            }
            parsed.media_type = Some(segments.join(";"));
        }

        debug!(
            "Parsed data URL: content type {:?}, base64 {}, {} byte payload",
            parsed.content_type,
            parsed.base64,
            parsed.data.len()
        );
        Ok(parsed)
    }

    /// Split a raw media type on `;` and lowercase every segment, except the
    /// value of a `name` attribute when casing is preserved.
    fn normalize_segments(&self, media_type: &str) -> Vec<String> {
        media_type
            .split(';')
            .enumerate()
            .map(|(index, segment)| {
                if index > 0 && self.options.preserve_name_case {
                    if let Some((key, value)) = segment.split_once('=') {
                        if key.eq_ignore_ascii_case(NAME_ATTRIBUTE) {
                            return format!("{}={}", NAME_ATTRIBUTE, value);
                        }
                    }
                }
                segment.to_ascii_lowercase()
            })
            .collect()
    }
}
