//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::line::{ArgPattern, PatternError, TokenizerOptions};
use crate::log::LogConfig;

/// Environment variable overriding the user config path.
pub const CONFIG_ENV: &str = "ARGLINE_CONFIG";

/// File name of the per-project config.
pub const PROJECT_CONFIG: &str = ".argline.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("rule '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Tokenizer settings.
    pub tokenizer: TokenizerConfig,

    /// Strip quotes and unescape extracted values.
    pub unquote: Option<bool>,

    /// Boolean flags to look for.
    pub flags: Vec<FlagRule>,

    /// Options that take the following argument as their value.
    pub named: Vec<NamedRule>,

    /// Names for positional arguments, in slot order.
    pub positionals: Vec<String>,

    /// Diagnostic logging.
    pub log: LogConfig,
}

/// Tokenizer settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Treat `=` as a separator so `--name=value` splits.
    pub assignment_separator: Option<bool>,
}

/// A flag rule.
#[derive(Debug, Clone, Deserialize)]
pub struct FlagRule {
    /// Key used in the report.
    pub name: String,
    /// Case-insensitive pattern matched against a whole argument.
    pub pattern: String,
}

/// A named-value rule.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRule {
    /// Key used in the report.
    pub name: String,
    /// Case-insensitive pattern matched against a whole argument.
    pub pattern: String,
}

/// Configuration with every pattern compiled.
#[derive(Debug)]
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Compiled flag rules, in declaration order.
    pub flags: Vec<(FlagRule, ArgPattern)>,
    /// Compiled named rules, in declaration order.
    pub named: Vec<(NamedRule, ArgPattern)>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_project_config(cwd)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        match Self::user_config_path() {
            Some(path) if path.exists() => Self::read(&path).map(Some),
            _ => Ok(None),
        }
    }

    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(PROJECT_CONFIG);
        if path.exists() {
            return Self::read(&path).map(Some);
        }
        Ok(None)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// User config path.
    /// Respects ARGLINE_CONFIG for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("argline").join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        self.flags.extend(other.flags);
        self.named.extend(other.named);
        if !other.positionals.is_empty() {
            self.positionals = other.positionals;
        }

        if other.unquote.is_some() {
            self.unquote = other.unquote;
        }
        if other.tokenizer.assignment_separator.is_some() {
            self.tokenizer.assignment_separator = other.tokenizer.assignment_separator;
        }
        self.log.merge(other.log);
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            assignment_separator: self.tokenizer.assignment_separator.unwrap_or(false),
        }
    }

    pub fn unquote_values(&self) -> bool {
        self.unquote.unwrap_or(false)
    }

    /// Compile all rule patterns.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let flags = self
            .flags
            .iter()
            .map(|rule| Ok((rule.clone(), compile_rule(&rule.name, &rule.pattern)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let named = self
            .named
            .iter()
            .map(|rule| Ok((rule.clone(), compile_rule(&rule.name, &rule.pattern)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(CompiledConfig {
            raw: self,
            flags,
            named,
        })
    }
}

fn compile_rule(name: &str, pattern: &str) -> Result<ArgPattern, ConfigError> {
    ArgPattern::new(pattern).map_err(|e| ConfigError::Pattern {
        name: name.to_string(),
        source: e,
    })
}
