//! Line grammar for translation files.
//!
//! ```text
//! {inherits en}            # first line only
//! greeting = Hi {name}     # trailing comment
//! price.tag = Item \#{0}   # \# is a literal hash
//! ```

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([0-9a-z._-]+)\s*=\s*((?:\\#|[^#])*)").expect("entry pattern is valid")
});

#[allow(clippy::expect_used)]
static INHERITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\{inherits\s+([^}]+)\}").expect("inherits pattern is valid")
});

/// Characters stripped from both ends of a value.
const VALUE_PADDING: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Result of matching one line against the entry grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<'a> {
    /// A `key = value` entry. The value is unescaped and trimmed.
    Entry {
        /// The key exactly as written.
        key: &'a str,
        /// The cleaned value.
        value: String,
    },
    /// Blank, comment-only or malformed line.
    Skipped,
}

/// Parses a single line of a translation file.
pub fn parse_line(line: &str) -> ParseOutcome<'_> {
    let Some(caps) = ENTRY.captures(line) else {
        return ParseOutcome::Skipped;
    };

    match (caps.get(1), caps.get(2)) {
        (Some(key), Some(value)) => ParseOutcome::Entry {
            key: key.as_str(),
            value: value
                .as_str()
                .replace("\\#", "#")
                .trim_matches(VALUE_PADDING)
                .to_string(),
        },
        _ => ParseOutcome::Skipped,
    }
}

/// Returns the parent name if `line` is an `{inherits <name>}` directive.
pub fn parse_inherits(line: &str) -> Option<&str> {
    INHERITS
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim())
        .filter(|name| !name.is_empty())
}
