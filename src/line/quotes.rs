//! Helpers for turning a raw argument into its plain value.
//!
//! Extractors hand back arguments verbatim, quotes and all.

/// Replace every `\"` with `"`.
pub fn unescape_quotes(input: &str) -> String {
    input.replace("\\\"", "\"")
}

/// Strip one pair of surrounding double quotes.
///
/// Returns `None` when `input` is not wrapped in quotes.
pub fn trim_quotes(input: &str) -> Option<&str> {
    if input.len() < 2 {
        return None;
    }
    input.strip_prefix('"')?.strip_suffix('"')
}

/// Trim surrounding quotes (if any), then unescape inner ones.
pub fn unquote(input: &str) -> String {
    unescape_quotes(trim_quotes(input).unwrap_or(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape_quotes(r#"say \"hi\""#), r#"say "hi""#);
        assert_eq!(unescape_quotes("plain"), "plain");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim_quotes("\"a b\""), Some("a b"));
        assert_eq!(trim_quotes("\"\""), Some(""));
        assert_eq!(trim_quotes("\""), None);
        assert_eq!(trim_quotes("\"open"), None);
        assert_eq!(trim_quotes("bare"), None);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""C:\dir \"x\"""#), r#"C:\dir "x""#);
        assert_eq!(unquote("file.txt"), "file.txt");
    }
}
