//! Report formatting for stdout.

use serde::Serialize;

use crate::extraction::Report;

/// Error line written to stderr when a request cannot be served.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Format a report as a single JSON line.
pub fn format_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Format an error as a single JSON line.
pub fn format_error(message: impl Into<String>) -> String {
    let response = ErrorResponse {
        error: message.into(),
    };
    serde_json::to_string(&response).unwrap_or_else(|_| r#"{"error":"unknown"}"#.to_string())
}
