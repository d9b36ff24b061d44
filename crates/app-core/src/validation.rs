//! Form field validation
//!
//! Shape checks for the login form fields and the latch used to keep a
//! field's "looks valid" indicator steady while the user is typing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Email shape accepted by the login form.
///
/// Local part is either dot-separated atoms that exclude `< > ( ) [ ] \ . , ; : @ "`
/// and whitespace, or a quoted string with no line terminators. The domain is
/// either a bracketed IPv4-like literal or dot-separated labels ending in a
/// label of at least two letters.
///
/// Whitespace and line terminators are spelled out as ECMAScript defines them
/// (`\s` includes U+FEFF but not U+0085; `.` stops at `\r`, U+2028 and U+2029),
/// so addresses are judged the same way browsers judge them.
pub const EMAIL_PATTERN: &str = concat!(
    r#"^(([^<>()\[\]\\.,;:"#,
    r#"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"#,
    r#"@"]+(\.[^<>()\[\]\\.,;:"#,
    r#"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"#,
    r#"@"]+)*)|("[^\n\r\x{2028}\x{2029}]+"))"#,
    r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
);

/// Default password threshold: a password must be longer than this
pub const DEFAULT_MIN_PASSWORD_LEN_EXCLUSIVE: usize = 4;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Check whether `input` has the shape of an email address
pub fn is_valid_email(input: &str) -> bool {
    email_regex().is_match(input)
}

/// Count user-perceived characters in a password
///
/// This counts grapheme clusters, not UTF-16 code units as a browser's
/// `String.length` would: `"🇫🇷🇩🇪"` is 2 here and 8 there.
pub fn password_len(input: &str) -> usize {
    input.graphemes(true).count()
}

/// Check whether `input` is strictly longer than `min_len_exclusive`
pub fn is_valid_password(input: &str, min_len_exclusive: usize) -> bool {
    password_len(input) > min_len_exclusive
}

/// Validation rules for the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Password must have more graphemes than this
    pub min_password_len_exclusive: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_len_exclusive: DEFAULT_MIN_PASSWORD_LEN_EXCLUSIVE,
        }
    }
}

impl ValidationConfig {
    /// Check a password against the configured threshold
    pub fn password_ok(&self, input: &str) -> bool {
        is_valid_password(input, self.min_password_len_exclusive)
    }
}

/// Two-state validity latch
///
/// The flag is raised only when a check passes while it is down, and
/// lowered only when a check fails while it is up. Each edge is a
/// separate transition, so callers can log or react to flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityLatch {
    valid: bool,
}

impl ValidityLatch {
    /// Create a lowered latch
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flag
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Feed the latest check result; returns `true` if the flag flipped
    pub fn update(&mut self, matches: bool) -> bool {
        if !self.valid {
            if matches {
                self.valid = true;
                return true;
            }
        } else if !matches {
            self.valid = false;
            return true;
        }
        false
    }
}
