//! Request parsing for the `argline` binary.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing a request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One extraction request read from stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// The raw command line, not pre-split.
    pub line: String,

    /// Directory searched for a project config (optional).
    #[serde(default)]
    pub cwd: Option<String>,
}

impl Request {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}
