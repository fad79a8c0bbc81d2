//! Error type for the text-rendering entry points.

use std::error::Error as StdError;
use std::fmt;

/// The extracted fragment could not be parsed as JSON.
#[derive(Debug)]
pub struct ParseError {
    source: serde_json::Error,
}

impl ParseError {
    pub(crate) fn new(source: serde_json::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not valid JSON: {}", self.source)
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}
