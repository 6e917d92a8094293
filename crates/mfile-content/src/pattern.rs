//! Pattern forms and placement policies for in-place edits

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How to locate the edit point inside existing file content.
///
/// A `Literal` pattern string is compiled by the editor with multiline
/// semantics, so `^`/`$` anchor at line boundaries. When the new content
/// ends with a newline, a trailing `$` in a literal pattern is additionally
/// allowed to consume that newline (`$` matches before a newline, not after
/// it, so a plain end anchor never covers the newline the replacement
/// already carries).
///
/// A `Compiled` pattern is used exactly as given: it is never recompiled
/// with different flags and never gets the trailing-`$` adjustment. Callers
/// supplying a compiled pattern must apply any equivalent fix themselves.
pub enum Pattern {
    /// A pattern string, compiled by the editor with multiline anchors
    Literal(String),
    /// A pre-compiled regular expression, used verbatim
    Compiled(Regex),
    /// Escape hatch: receives the existing text, returns the full new text
    Transform(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl Pattern {
    /// Wrap a transform function as a pattern
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Transform(Box::new(f))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(source) => f.debug_tuple("Literal").field(source).finish(),
            Self::Compiled(regex) => f.debug_tuple("Compiled").field(&regex.as_str()).finish(),
            Self::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::Literal(source.to_string())
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::Literal(source)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::Compiled(regex)
    }
}

/// Placement policy for pattern-based edits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternLocation {
    /// Overwrite the first match, or leave the text untouched
    Replace,
    /// Overwrite the first match, or append the content to the text
    #[default]
    ReplaceOrAdd,
    /// Insert the content immediately before the first match, once
    Before,
    /// Insert the content immediately after the first match, once
    After,
}

impl PatternLocation {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::ReplaceOrAdd => "replace_or_add",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for PatternLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "replace" => Ok(Self::Replace),
            "replace_or_add" => Ok(Self::ReplaceOrAdd),
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(Error::UnknownPatternLocation(other.to_string())),
        }
    }
}
