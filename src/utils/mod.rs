//! Utility functions and types
//!
//! Base64 decoding policies and `url` crate interop.

pub mod base64;
pub mod uri;

// Re-export commonly used utilities
pub use self::base64::{decode_base64, Base64Policy};
pub use self::uri::{is_data_scheme, parse_url, parse_url_str};
