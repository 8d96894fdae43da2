//! argline - lossless command-line tokenizing and argument extraction.
//!
//! A raw command line is split into argument and separator tokens that
//! concatenate back to the exact input. Arguments can then be taken out by
//! slot, by flag pattern, or by option pattern plus the value after it.

pub mod config;
pub mod extraction;
pub mod input;
pub mod line;
pub mod log;
pub mod output;

pub use config::{CompiledConfig, Config};
pub use extraction::{Report, extract};
pub use input::Request;
pub use line::{ArgPattern, Arguments, Token, collapse, reparse, tokenize};
pub use log::LogConfig;
pub use output::format_report;
