//! Word and quote scanning over a raw command line.

use std::iter::Peekable;
use std::str::CharIndices;

/// Which characters split words apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Separators {
    /// Treat `=` as a separator in addition to whitespace.
    pub assignment: bool,
}

impl Separators {
    fn contains(self, c: char) -> bool {
        c.is_whitespace() || (self.assignment && c == '=')
    }
}

/// A maximal run of non-separator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    /// Byte offset of the first char.
    pub start: usize,
    /// Byte offset one past the last char.
    pub end: usize,
    /// Unescaped quotes sitting on the first or last char (0, 1 or 2).
    pub boundary_quotes: usize,
}

/// Single forward pass yielding [`Word`] spans in order.
pub struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    separators: Separators,
    len: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(raw: &'a str, separators: Separators) -> Self {
        Self {
            chars: raw.char_indices().peekable(),
            separators,
            len: raw.len(),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        while self
            .chars
            .next_if(|&(_, c)| self.separators.contains(c))
            .is_some()
        {}

        let (start, first) = self.chars.next()?;
        // A word never starts after a backslash, so a leading quote is live.
        let opens = first == '"';
        let mut backslashes = usize::from(first == '\\');
        let mut last = start;
        let mut closes = false;

        while let Some((idx, c)) = self.chars.next_if(|&(_, c)| !self.separators.contains(c)) {
            closes = c == '"' && backslashes % 2 == 0;
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
            last = idx;
        }

        let end = self.chars.peek().map_or(self.len, |&(idx, _)| idx);
        let boundary_quotes = usize::from(opens) + usize::from(closes && last != start);

        Some(Word {
            start,
            end,
            boundary_quotes,
        })
    }
}

/// Scan `raw` into words using whitespace as the only separator.
pub fn scan(raw: &str) -> Vec<Word> {
    Scanner::new(raw, Separators::default()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(raw: &str) -> Vec<(&str, usize)> {
        scan(raw)
            .into_iter()
            .map(|w| (&raw[w.start..w.end], w.boundary_quotes))
            .collect()
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(spans("a  bc\td"), vec![("a", 0), ("bc", 0), ("d", 0)]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(scan("").is_empty());
        assert!(scan(" \t ").is_empty());
    }

    #[test]
    fn test_boundary_quotes() {
        assert_eq!(
            spans(r#""arg 3" arg"4"#),
            vec![("\"arg", 1), ("3\"", 1), ("arg\"4", 0)]
        );
    }

    #[test]
    fn test_quoted_word_counts_both_ends() {
        assert_eq!(spans(r#""x""#), vec![(r#""x""#, 2)]);
    }

    #[test]
    fn test_lone_quote_counts_once() {
        assert_eq!(spans(r#"a " b"#), vec![("a", 0), ("\"", 1), ("b", 0)]);
    }

    #[test]
    fn test_escaped_closing_quote() {
        assert_eq!(spans(r#"\"arg\""#), vec![(r#"\"arg\""#, 0)]);
    }

    #[test]
    fn test_double_backslash_does_not_escape() {
        assert_eq!(spans(r#""a\\""#), vec![(r#""a\\""#, 2)]);
        assert_eq!(spans(r#""a\\\""#), vec![(r#""a\\\""#, 1)]);
    }

    #[test]
    fn test_assignment_separator() {
        let raw = "--out=file.txt";
        let words: Vec<&str> = Scanner::new(raw, Separators { assignment: true })
            .map(|w| &raw[w.start..w.end])
            .collect();
        assert_eq!(words, vec!["--out", "file.txt"]);
        assert_eq!(spans(raw), vec![("--out=file.txt", 0)]);
    }

    #[test]
    fn test_multibyte_offsets() {
        let raw = "héllo  wörld";
        let words: Vec<&str> = scan(raw).iter().map(|w| &raw[w.start..w.end]).collect();
        assert_eq!(words, vec!["héllo", "wörld"]);
    }
}
