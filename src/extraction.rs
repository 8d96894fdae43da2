//! Runs the configured extraction plan over one command line.

use serde::Serialize;
use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::CompiledConfig;
use crate::line::{Arguments, unquote};

/// What was found, keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Presence of each flag rule.
    pub flags: BTreeMap<String, bool>,
    /// Value of each named rule, `None` when absent.
    pub named: BTreeMap<String, Option<String>>,
    /// Value of each positional slot, `None` past the end.
    pub positionals: BTreeMap<String, Option<String>>,
    /// Whatever was not extracted.
    pub remainder: String,
}

/// Extract flags, then named values, then positionals.
///
/// The line is reparsed after every successful removal, so a later rule
/// never sees a cleared slot as a neighbour and positional indices count
/// only the arguments still present.
pub fn extract(line: &str, config: &CompiledConfig) -> Report {
    let mut args = Arguments::parse_with(line, config.raw.tokenizer_options());
    let words = &config.raw.log;
    let unquote_values = config.raw.unquote_values();
    let finish = |value: String| {
        if unquote_values {
            unquote(&value)
        } else {
            value
        }
    };

    debug!("tokenized {} argument(s) from '{}'", args.len(), line);

    let mut report = Report::default();

    for (rule, pattern) in &config.flags {
        let found = args.flag(pattern);
        if found {
            args.reparse();
        }
        info!("flag {}: {}", rule.name, words.yes_no(found));
        report.flags.insert(rule.name.clone(), found);
    }

    for (rule, pattern) in &config.named {
        let value = args.named(pattern).map(finish);
        match &value {
            Some(v) => {
                args.reparse();
                info!("named {}: '{}'", rule.name, v);
            }
            None => info!("named {}: {}", rule.name, words.yes_no(false)),
        }
        report.named.insert(rule.name.clone(), value);
    }

    for (index, name) in config.raw.positionals.iter().enumerate() {
        let value = args.positional(index).map(finish);
        if value.is_none() {
            warn!("positional {name} (slot {index}) is missing");
        }
        report.positionals.insert(name.clone(), value);
    }

    report.remainder = args.collapse();
    debug!("remainder: '{}'", report.remainder);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::log::{LogConfig, dispatch};
    use tracing::dispatcher::with_default;

    fn compiled(toml: &str) -> CompiledConfig {
        Config::from_toml(toml).unwrap().compile().unwrap()
    }

    const PLAN: &str = r#"
positionals = ["program", "input"]

[[flags]]
name = "verbose"
pattern = '-v|--verbose'

[[flags]]
name = "force"
pattern = '-f|--force'

[[named]]
name = "output"
pattern = '-o|--out'
"#;

    #[test]
    fn test_full_plan() {
        let config = compiled(PLAN);
        let report = extract(r#"tool.exe --VERBOSE in.txt -o "out dir" --extra"#, &config);
        assert!(report.flags["verbose"]);
        assert!(!report.flags["force"]);
        assert_eq!(report.named["output"].as_deref(), Some("\"out dir\""));
        assert_eq!(report.positionals["program"].as_deref(), Some("tool.exe"));
        assert_eq!(report.positionals["input"].as_deref(), Some("in.txt"));
        assert_eq!(report.remainder, "--extra");
    }

    #[test]
    fn test_missing_values() {
        let config = compiled(PLAN);
        let report = extract("tool -o", &config);
        assert_eq!(report.named["output"], None);
        assert_eq!(report.positionals["program"].as_deref(), Some("tool"));
        // The dangling option is still a positional argument.
        assert_eq!(report.positionals["input"].as_deref(), Some("-o"));
        assert_eq!(report.remainder, "");
    }

    #[test]
    fn test_past_the_end() {
        let config = compiled(PLAN);
        let report = extract("tool", &config);
        assert_eq!(report.positionals["input"], None);
    }

    #[test]
    fn test_unquote_values() {
        let config = compiled(
            r#"
unquote = true
positionals = ["path"]
[[named]]
name = "title"
pattern = '--title'
"#,
        );
        let report = extract(r#""C:\Program Files\app.exe" --title "say \"hi\"""#, &config);
        assert_eq!(report.named["title"].as_deref(), Some(r#"say "hi""#));
        assert_eq!(
            report.positionals["path"].as_deref(),
            Some(r"C:\Program Files\app.exe")
        );
    }

    #[test]
    fn test_assignment_separator() {
        let config = compiled(
            r#"
[tokenizer]
assignment_separator = true
[[named]]
name = "level"
pattern = '--level'
"#,
        );
        let report = extract("run --level=3 now", &config);
        assert_eq!(report.named["level"].as_deref(), Some("3"));
        assert_eq!(report.remainder, "run now");
    }

    #[test]
    fn test_flag_between_option_and_value() {
        let config = compiled(
            r#"
positionals = ["program", "input"]
[[flags]]
name = "quiet"
pattern = '-q'
[[named]]
name = "output"
pattern = '--out'
"#,
        );
        let report = extract("app --out -q file.txt", &config);
        assert!(report.flags["quiet"]);
        assert_eq!(report.named["output"].as_deref(), Some("file.txt"));
        assert_eq!(report.positionals["program"].as_deref(), Some("app"));
        assert_eq!(report.positionals["input"], None);
        assert_eq!(report.remainder, "");
    }

    #[test]
    fn test_named_rules_see_earlier_removals() {
        let config = compiled(
            r#"
[[named]]
name = "first"
pattern = '-a'
[[named]]
name = "second"
pattern = '-b'
"#,
        );
        let report = extract("-b -a x y", &config);
        assert_eq!(report.named["first"].as_deref(), Some("x"));
        assert_eq!(report.named["second"].as_deref(), Some("y"));
        assert_eq!(report.remainder, "");
    }

    #[test]
    fn test_logs_results() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let dispatch = dispatch(&LogConfig {
            file: Some(temp.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();
        with_default(&dispatch, || extract("app -v", &compiled(PLAN)));

        let content = std::fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("flag verbose: Yes"));
        assert!(content.contains("flag force: No"));
        assert!(content.contains("WARN"));
        assert!(content.contains("positional input (slot 1) is missing"));
        assert!(!content.contains("tokenized"));
    }
}
