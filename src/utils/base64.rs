//! Base64 decoding utilities
//!
//! This module provides the strict and forgiving decoders used to materialize
//! base64 payloads.

use base64::engine::{self, general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Standard alphabet, padding optional, non-zero trailing bits tolerated.
const FORGIVING: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    engine::GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(engine::DecodePaddingMode::Indifferent),
);

/// How base64 payloads are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base64Policy {
    /// Canonical padding required, no whitespace, no stray trailing bits
    #[default]
    Strict,
    /// ASCII whitespace ignored, padding optional, trailing bits tolerated
    Forgiving,
}

/// Decode base64 data
pub fn decode_base64(data: &str, policy: Base64Policy) -> Result<Vec<u8>, Error> {
    match policy {
        Base64Policy::Strict => Ok(STANDARD.decode(data)?),
        Base64Policy::Forgiving => {
            let compact: String = data
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            Ok(FORGIVING.decode(compact)?)
        }
    }
}
