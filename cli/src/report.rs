use serde::Serialize;
use valid_data_url::{DataUrl, Parser};

/// Outcome of parsing and materializing one input
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<DataUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// A report is ok when the input parsed and its payload materialized
    pub fn is_ok(&self) -> bool {
        self.valid && self.error.is_none()
    }
}

pub fn build_report(parser: &Parser, input: &str) -> Report {
    let parsed = match parser.parse(input) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Report {
                input: input.to_string(),
                valid: false,
                parsed: None,
                byte_length: None,
                error: Some(e.to_string()),
            }
        }
    };

    let (byte_length, error) = match parsed.to_buffer() {
        Ok(bytes) => (Some(bytes.len()), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Report {
        input: input.to_string(),
        valid: true,
        parsed: Some(parsed),
        byte_length,
        error,
    }
}
