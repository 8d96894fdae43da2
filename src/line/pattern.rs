//! Case-insensitive whole-token patterns for flag and named lookups.

use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid argument pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// A compiled pattern matched against an entire argument, ignoring case.
#[derive(Debug, Clone)]
pub struct ArgPattern {
    source: String,
    regex: Regex,
}

impl ArgPattern {
    /// Compile `pattern`. The match is anchored at both ends.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError {
                pattern: pattern.to_string(),
                source: e,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl FromStr for ArgPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ArgPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
