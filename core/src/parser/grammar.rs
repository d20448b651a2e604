//! # Line Grammars
//!
//! Pattern matchers for the three kinds of logical line found in
//! documentation sections:
//!
//! - parameter lines: `name [(type)] [-- [required.|optional.] description]`
//! - response headings: `[http] [code] response:`
//! - error lines: `code -- description`

use crate::model::DEFAULT_STATUS_CODE;
use regex::Regex;
use std::sync::OnceLock;

/// Explicit requirement marker written after `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// `required.`
    Required,
    /// `optional.`
    Optional,
}

/// Fields captured from a parameter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamLine {
    /// One or more words separated by single spaces.
    pub name: String,
    /// Type token from `(type)`, if present.
    pub dtype: Option<String>,
    /// The `required.` / `optional.` marker, if present.
    pub requirement: Option<Requirement>,
    /// Text after the marker. `None` when the line has no `-- text` part.
    pub description: Option<String>,
}

impl ParamLine {
    /// Whether the line carries an explicit `required.` marker.
    pub fn is_marked_required(&self) -> bool {
        self.requirement == Some(Requirement::Required)
    }

    /// Whether the line carries an explicit `optional.` marker.
    pub fn is_marked_optional(&self) -> bool {
        self.requirement == Some(Requirement::Optional)
    }

    /// Description trimmed, or empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Fields captured from an error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLine {
    /// Numeric status code, kept as text.
    pub code: String,
    /// Everything after the `--`.
    pub description: String,
}

fn param_regex() -> &'static Regex {
    static PARAM_RE: OnceLock<Regex> = OnceLock::new();
    PARAM_RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)^(?P<name>\w+(?: +\w+)*)",
            r"(?:\s+\((?P<type>[\w\[\]]+)\)?)?",
            r"\s*(?:--(?:\s+(?:(?P<required>required|optional)\.)?(?P<description>.*))?)?"
        ))
        .expect("Invalid regex")
    })
}

fn response_regex() -> &'static Regex {
    static RESPONSE_RE: OnceLock<Regex> = OnceLock::new();
    RESPONSE_RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:http\s+)?(?:(?P<code>\d+)\s+)?response:$").expect("Invalid regex")
    })
}

fn error_regex() -> &'static Regex {
    static ERROR_RE: OnceLock<Regex> = OnceLock::new();
    ERROR_RE.get_or_init(|| {
        Regex::new(r"(?i)^(?P<code>\d+)\s*--\s*(?P<description>.*)$").expect("Invalid regex")
    })
}

/// Matches a parameter line. The match is anchored at the start only, so any
/// line that begins with a word character yields at least a name.
pub fn match_param(line: &str) -> Option<ParamLine> {
    let caps = param_regex().captures(line)?;
    let requirement = caps.name("required").map(|m| {
        if m.as_str().eq_ignore_ascii_case("required") {
            Requirement::Required
        } else {
            Requirement::Optional
        }
    });

    Some(ParamLine {
        name: caps.name("name")?.as_str().to_string(),
        dtype: caps.name("type").map(|m| m.as_str().to_string()),
        requirement,
        description: caps.name("description").map(|m| m.as_str().to_string()),
    })
}

/// Matches a response heading and returns its status code, defaulting to
/// `"200"` when the heading names none.
pub fn match_response_header(line: &str) -> Option<String> {
    let caps = response_regex().captures(line.trim())?;
    Some(
        caps.name("code")
            .map_or(DEFAULT_STATUS_CODE, |m| m.as_str())
            .to_string(),
    )
}

/// Matches an error line.
pub fn match_error(line: &str) -> Option<ErrorLine> {
    let caps = error_regex().captures(line)?;
    Some(ErrorLine {
        code: caps.name("code")?.as_str().to_string(),
        description: caps
            .name("description")
            .map_or("", |m| m.as_str())
            .to_string(),
    })
}
