//! Builder for configuring and creating parsers

use super::{Parser, ParserOptions};
use crate::utils::base64::Base64Policy;

/// Builder for creating and configuring data URL parsers
#[derive(Debug, Clone, Default)]
pub struct ParserBuilder {
    /// Parser options
    options: ParserOptions,
}

impl ParserBuilder {
    /// Create a new parser builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of options
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Set how base64 payloads are decoded
    pub fn base64_policy(mut self, policy: Base64Policy) -> Self {
        self.options.base64_policy = policy;
        self
    }

    /// Set whether `name` attribute values keep their casing
    pub fn preserve_name_case(mut self, enable: bool) -> Self {
        self.options.preserve_name_case = enable;
        self
    }

    /// Build the parser
    pub fn build(self) -> Parser {
        Parser::with_options(self.options)
    }
}
