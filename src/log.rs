//! Diagnostic logging setup.
//!
//! [`dispatch`] turns a [`LogConfig`] into a `tracing` dispatcher. Callers
//! scope it with `tracing::dispatcher::with_default`; nothing is installed
//! globally.

use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Message severity. Lower variants are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => LevelFilter::ERROR,
            Level::Warn => LevelFilter::WARN,
            Level::Info => LevelFilter::INFO,
            Level::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration. Unset fields fall back to defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Most verbose level written (default: info).
    pub level: Option<Level>,
    /// Include the level on each line (default: true).
    pub headers: Option<bool>,
    /// How `true` is rendered in messages (default: "Yes").
    pub true_value: Option<String>,
    /// How `false` is rendered in messages (default: "No").
    pub false_value: Option<String>,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
    /// Line format (default: text).
    pub format: Option<LogFormat>,
    /// Prefix lines with a timestamp (default: false).
    pub timestamps: Option<bool>,
}

impl LogConfig {
    pub fn level(&self) -> Level {
        self.level.unwrap_or(Level::Info)
    }

    pub fn headers(&self) -> bool {
        self.headers.unwrap_or(true)
    }

    pub fn format(&self) -> LogFormat {
        self.format.unwrap_or_default()
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps.unwrap_or(false)
    }

    /// Render a boolean with the configured words.
    pub fn yes_no(&self, value: bool) -> &str {
        let configured = if value {
            &self.true_value
        } else {
            &self.false_value
        };
        match configured {
            Some(word) => word.as_str(),
            None if value => "Yes",
            None => "No",
        }
    }

    /// Overlay fields that are set in `other`.
    pub fn merge(&mut self, other: LogConfig) {
        overlay(&mut self.level, other.level);
        overlay(&mut self.headers, other.headers);
        overlay(&mut self.true_value, other.true_value);
        overlay(&mut self.false_value, other.false_value);
        overlay(&mut self.file, other.file);
        overlay(&mut self.format, other.format);
        overlay(&mut self.timestamps, other.timestamps);
    }
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Build a dispatcher for `config`, opening the log file if one is set.
pub fn dispatch(config: &LogConfig) -> io::Result<Dispatch> {
    let writer = match &config.file {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_append(path)?)),
        None => BoxMakeWriter::new(io::stderr),
    };
    Ok(build(config, writer))
}

/// Build a dispatcher for `config` that writes to stderr regardless of
/// `config.file`.
pub fn stderr_dispatch(config: &LogConfig) -> Dispatch {
    build(config, BoxMakeWriter::new(io::stderr))
}

fn build(config: &LogConfig, writer: BoxMakeWriter) -> Dispatch {
    let builder = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(config.level()))
        .with_level(config.headers())
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    match (config.format(), config.timestamps()) {
        (LogFormat::Text, true) => Dispatch::new(builder.finish()),
        (LogFormat::Text, false) => Dispatch::new(builder.without_time().finish()),
        (LogFormat::Json, true) => Dispatch::new(builder.json().finish()),
        (LogFormat::Json, false) => Dispatch::new(builder.json().without_time().finish()),
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
