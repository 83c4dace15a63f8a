//! Lexical grammar for data URLs
//!
//! ```text
//! data-url     := "data:" media-type? ";base64"? "," payload
//! media-type   := type-subtype attr-param*
//! type-subtype := 1*ALPHA "/" 1*( ALPHA / DIGIT / "-" / "+" / "." )
//! attr-param   := ";" 1*ATTRCHAR "=" 1*VALCHAR
//! payload      := *PAYLOADCHAR
//! ```
//!
//! Each production is kept as its own sub-pattern so it can be matched and
//! tested on its own. The full expression is assembled from them once.
//!
//! Character classes are spelled out in ASCII with both cases rather than
//! relying on a case-insensitive flag, which in Unicode mode would also
//! accept characters such as the Kelvin sign for `k`. Only the literal
//! `data:` scheme and `;base64` marker are matched case-insensitively.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The mandatory scheme prefix.
const SCHEME: &str = "(?i:data:)";

/// `type/subtype`, e.g. `image/svg+xml`.
const TYPE_SUBTYPE: &str = r"[A-Za-z]+/[A-Za-z0-9+.-]+";

/// One `;key=value` attribute segment. Keys do not allow `(`, `)` or `_`.
const ATTRIBUTE: &str = r";[A-Za-z0-9!#$%*+.{}|~`-]+=[A-Za-z0-9!#$%*+.{}()_|~`-]+";

/// The base64 marker immediately before the separating comma.
const BASE64_MARKER: &str = "(?i:;base64)";

/// Everything after the separating comma, up to the end of input.
const PAYLOAD: &str = r"[A-Za-z0-9!$&',()*+;=._~:@/?%\s<>-]*?";

/// Capture group names used by the decomposer.
pub(crate) const MEDIA_TYPE_GROUP: &str = "media_type";
pub(crate) const BASE64_GROUP: &str = "base64";
pub(crate) const DATA_GROUP: &str = "data";

static DATA_URL: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^{SCHEME}(?P<{MEDIA_TYPE_GROUP}>{TYPE_SUBTYPE}(?:{ATTRIBUTE})*)?(?P<{BASE64_GROUP}>{BASE64_MARKER})?,(?P<{DATA_GROUP}>{PAYLOAD})$"
    );
    Regex::new(&pattern).expect("data URL grammar must compile")
});

/// A named production of the data URL grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `type/subtype`
    TypeSubtype,
    /// `;key=value`
    Attribute,
    /// `;base64`
    Base64Marker,
    /// Payload characters after the comma
    Payload,
}

impl Segment {
    fn pattern(self) -> &'static str {
        match self {
            Segment::TypeSubtype => TYPE_SUBTYPE,
            Segment::Attribute => ATTRIBUTE,
            Segment::Base64Marker => BASE64_MARKER,
            Segment::Payload => PAYLOAD,
        }
    }

    /// Check whether `text` is exactly one occurrence of this production.
    pub fn matches(self, text: &str) -> bool {
        static ANCHORED: Lazy<[Regex; 4]> = Lazy::new(|| {
            [
                Segment::TypeSubtype,
                Segment::Attribute,
                Segment::Base64Marker,
                Segment::Payload,
            ]
            .map(|segment| {
                Regex::new(&format!("^(?:{})$", segment.pattern()))
                    .expect("grammar segment must compile")
            })
        });

        let index = match self {
            Segment::TypeSubtype => 0,
            Segment::Attribute => 1,
            Segment::Base64Marker => 2,
            Segment::Payload => 3,
        };
        ANCHORED[index].is_match(text)
    }
}

/// Check whether `input`, after trimming surrounding whitespace, is a data URL.
pub fn is_match(input: &str) -> bool {
    DATA_URL.is_match(input.trim())
}

/// Match `input` after trimming and return the capture groups on success.
pub(crate) fn captures(input: &str) -> Option<Captures<'_>> {
    DATA_URL.captures(input.trim())
}
