//! Lossless, quote-aware splitting of a command line into tokens.

use std::fmt;

use super::scanner::{Scanner, Separators};

/// A slice of the original command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One argument, quotes included verbatim.
    Argument(String),
    /// Whitespace (or `=` when enabled) between or around arguments.
    Separator(String),
}

impl Token {
    /// The text this token contributes to the line.
    pub fn text(&self) -> &str {
        match self {
            Token::Argument(s) | Token::Separator(s) => s,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, Token::Argument(_))
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Separator(_))
    }

    /// True once the token has been cleared by an extractor.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Move the text out, leaving an empty token of the same kind.
    pub fn take(&mut self) -> String {
        match self {
            Token::Argument(s) | Token::Separator(s) => std::mem::take(s),
        }
    }

    pub fn clear(&mut self) {
        self.take();
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Options controlling how a line is split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Split `--name=value` into `--name`, `=`, `value`.
    pub assignment_separator: bool,
}

impl TokenizerOptions {
    fn separators(self) -> Separators {
        Separators {
            assignment: self.assignment_separator,
        }
    }
}

/// Tokenize a command line with default options.
///
/// Example:
/// `arg1  arg2 "arg 3"   arg"4` ->
/// `["arg1", "  ", "arg2", " ", "\"arg 3\"", "   ", "arg\"4"]`
pub fn tokenize(raw: &str) -> Vec<Token> {
    tokenize_with(raw, TokenizerOptions::default())
}

/// Tokenize a command line.
///
/// Words are joined into one argument while the running count of boundary
/// quotes is odd. Whitespace inside such a run belongs to the argument. An
/// unterminated quote extends the final argument to the end of the line,
/// trailing whitespace included.
pub fn tokenize_with(raw: &str, options: TokenizerOptions) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut quotes = 0usize;
    // End of the last emitted argument.
    let mut cursor = 0;
    // Start of the argument being assembled.
    let mut open: Option<usize> = None;

    for word in Scanner::new(raw, options.separators()) {
        let start = match open {
            Some(start) => start,
            None => {
                if cursor < word.start {
                    tokens.push(Token::Separator(raw[cursor..word.start].to_string()));
                }
                word.start
            }
        };

        quotes += word.boundary_quotes;

        if quotes % 2 == 0 {
            tokens.push(Token::Argument(raw[start..word.end].to_string()));
            cursor = word.end;
            open = None;
        } else {
            open = Some(start);
        }
    }

    if let Some(start) = open {
        tokens.push(Token::Argument(raw[start..].to_string()));
    } else if cursor < raw.len() {
        tokens.push(Token::Separator(raw[cursor..].to_string()));
    }

    tokens
}

/// Concatenate tokens back into a line.
pub fn collapse(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// Collapse and tokenize again, dropping cleared slots.
pub fn reparse(tokens: &[Token]) -> Vec<Token> {
    reparse_with(tokens, TokenizerOptions::default())
}

pub fn reparse_with(tokens: &[Token], options: TokenizerOptions) -> Vec<Token> {
    tokenize_with(&collapse(tokens), options)
}
