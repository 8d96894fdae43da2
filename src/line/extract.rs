//! Find-and-remove operations over a token sequence.
//!
//! Matched tokens are cleared in place rather than removed, so slot
//! positions stay stable within one sequence. Call [`reparse`] between a
//! pattern lookup and a positional lookup when the positional index should
//! reflect the line as it now reads.
//!
//! [`reparse`]: super::reparse

use super::pattern::ArgPattern;
use super::tokenizer::Token;

/// Take the argument in slot `index` (zero-based, separators not counted).
///
/// The separator after it is cleared too. Returns `None` without touching
/// `tokens` when there are not that many argument slots.
pub fn get_positional(tokens: &mut [Token], index: usize) -> Option<String> {
    let pos = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_argument())
        .nth(index)
        .map(|(pos, _)| pos)?;

    let value = tokens[pos].take();
    clear_separator(tokens, pos + 1);
    Some(value)
}

/// Remove the first argument matching `pattern`.
pub fn get_flag(tokens: &mut [Token], pattern: &ArgPattern) -> bool {
    let Some(pos) = tokens.iter().position(|t| is_candidate(t, pattern)) else {
        return false;
    };

    tokens[pos].clear();
    clear_separator(tokens, pos + 1);
    true
}

/// Remove the first argument matching `pattern` that has a value after it,
/// and return that value.
///
/// A match with nothing following is skipped and scanning continues, so a
/// later occurrence can still succeed. A value slot that an earlier lookup
/// emptied counts as nothing following.
pub fn get_named(tokens: &mut [Token], pattern: &ArgPattern) -> Option<String> {
    let pos = (0..tokens.len()).find(|&i| {
        is_candidate(&tokens[i], pattern)
            && tokens.get(i + 1).is_some_and(Token::is_separator)
            && tokens
                .get(i + 2)
                .is_some_and(|t| t.is_argument() && !t.is_empty())
    })?;

    tokens[pos].clear();
    tokens[pos + 1].clear();
    let value = tokens[pos + 2].take();
    clear_separator(tokens, pos + 3);
    Some(value)
}

fn is_candidate(token: &Token, pattern: &ArgPattern) -> bool {
    match token {
        Token::Argument(text) => !text.is_empty() && pattern.is_match(text),
        Token::Separator(_) => false,
    }
}

fn clear_separator(tokens: &mut [Token], pos: usize) {
    if let Some(token) = tokens.get_mut(pos).filter(|t| t.is_separator()) {
        token.clear();
    }
}
