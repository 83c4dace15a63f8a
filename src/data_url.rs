//! The decomposed form of a data URL

use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::utils::base64::{decode_base64, Base64Policy};

/// A successfully parsed data URL.
///
/// Values are immutable once built. `content_type` is present exactly when
/// `media_type` is, and attributes only exist alongside a media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUrl {
    /// Full `type/subtype;key=value...` string, case-normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) media_type: Option<String>,

    /// The `type/subtype` token, lowercase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,

    /// `;key=value` attributes in input order. A repeated key keeps its first
    /// position and takes the later value.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub(crate) attributes: IndexMap<String, String>,

    /// Whether the `;base64` marker preceded the payload.
    pub(crate) base64: bool,

    /// Payload text after the separating comma, verbatim.
    pub(crate) data: String,

    #[serde(skip)]
    pub(crate) base64_policy: Base64Policy,
}

impl DataUrl {
    /// The case-normalized media type, including attributes.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// The lowercase `type/subtype` token.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// All attributes in the order they first appeared.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Look up an attribute by key. Keys are compared case-insensitively.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    /// The `charset` attribute, if any.
    pub fn charset(&self) -> Option<&str> {
        self.attribute("charset")
    }

    /// The `name` attribute, if any. Its casing is preserved by default.
    pub fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    /// Whether the payload is base64-encoded.
    pub fn is_base64(&self) -> bool {
        self.base64
    }

    /// The raw payload. Percent-escapes are not decoded.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// The base64 policy [`DataUrl::to_buffer`] applies.
    pub fn base64_policy(&self) -> Base64Policy {
        self.base64_policy
    }

    /// Materialize the payload as bytes.
    ///
    /// Base64 payloads are decoded according to [`DataUrl::base64_policy`].
    /// Anything else is returned as its UTF-8 bytes; `%3C` stays three bytes
    /// and is never turned into `<`.
    pub fn to_buffer(&self) -> Result<Vec<u8>> {
        if !self.base64 {
            return Ok(self.data.as_bytes().to_vec());
        }

        decode_base64(&self.data, self.base64_policy).map_err(|e| {
            debug!(
                "Failed to decode {} byte base64 payload: {}",
                self.data.len(),
                e
            );
            e
        })
    }
}

impl FromStr for DataUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Parser::default().parse(s)
    }
}
