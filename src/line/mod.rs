//! Command-line tokenizing and argument extraction.

mod extract;
mod pattern;
mod quotes;
mod scanner;
mod tokenizer;

use std::fmt;

pub use extract::{get_flag, get_named, get_positional};
pub use pattern::{ArgPattern, PatternError};
pub use quotes::{trim_quotes, unescape_quotes, unquote};
pub use scanner::{Scanner, Separators, Word, scan};
pub use tokenizer::{
    Token, TokenizerOptions, collapse, reparse, reparse_with, tokenize, tokenize_with,
};

/// An owned token sequence for one command line.
///
/// Each lookup removes what it finds. Whatever is left reads back through
/// [`Arguments::collapse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    tokens: Vec<Token>,
    options: TokenizerOptions,
}

impl Arguments {
    /// Tokenize `raw` with default options.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, TokenizerOptions::default())
    }

    pub fn parse_with(raw: &str, options: TokenizerOptions) -> Self {
        Self {
            tokens: tokenize_with(raw, options),
            options,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Number of argument slots, cleared ones included.
    pub fn len(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_argument()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the argument in slot `index`. See [`get_positional`].
    pub fn positional(&mut self, index: usize) -> Option<String> {
        get_positional(&mut self.tokens, index)
    }

    /// Remove the first argument matching `pattern`. See [`get_flag`].
    pub fn flag(&mut self, pattern: &ArgPattern) -> bool {
        get_flag(&mut self.tokens, pattern)
    }

    /// Remove a matching argument and the value after it. See [`get_named`].
    pub fn named(&mut self, pattern: &ArgPattern) -> Option<String> {
        get_named(&mut self.tokens, pattern)
    }

    /// Rebuild from the current line so cleared slots stop counting.
    pub fn reparse(&mut self) {
        self.tokens = reparse_with(&self.tokens, self.options);
    }

    /// The line as it reads now.
    pub fn collapse(&self) -> String {
        collapse(&self.tokens)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|t| f.write_str(t.text()))
    }
}

impl From<Vec<Token>> for Arguments {
    fn from(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            options: TokenizerOptions::default(),
        }
    }
}
