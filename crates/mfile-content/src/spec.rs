//! ContentSpec: the resolved intent for one write operation

use std::path::Path;

use crate::content::Content;
use crate::editor;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::pattern::{Pattern, PatternLocation};
use crate::resolver;

/// The resolved description of what to write to one target file.
///
/// Defaults are computed eagerly at construction: an omitted format falls
/// back to the target path's extension, and is forced to text when a
/// pattern is supplied or the content is raw text. A spec is immutable once
/// built and exactly one resolution path runs per spec: pattern edit or
/// format serialization, never both.
///
/// The content value is optional. An absent value means the caller manages
/// other attributes of the file but leaves its content alone; rendering
/// such a spec yields no buffer.
#[derive(Debug)]
pub struct ContentSpec {
    content: Option<Content>,
    format: Format,
    pattern: Option<Pattern>,
    pattern_location: PatternLocation,
}

impl ContentSpec {
    /// Build a spec, resolving defaults from the target path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PatternAndNonTextFormat`] when an explicit non-text
    /// format is combined with a pattern.
    pub fn new(
        path: &Path,
        content: Option<Content>,
        format: Option<Format>,
        pattern: Option<Pattern>,
        pattern_location: Option<PatternLocation>,
    ) -> Result<Self> {
        let format =
            format.unwrap_or_else(|| default_format(path, content.as_ref(), pattern.is_some()));
        if pattern.is_some() && format != Format::Text {
            return Err(Error::PatternAndNonTextFormat(format));
        }
        Ok(Self {
            content,
            format,
            pattern,
            pattern_location: pattern_location.unwrap_or_default(),
        })
    }

    /// Shorthand for a whole-file spec with everything inferred from the path
    pub fn for_path(path: &Path, content: impl Into<Content>) -> Result<Self> {
        Self::new(path, Some(content.into()), None, None, None)
    }

    /// Resolved serialization format
    pub fn format(&self) -> Format {
        self.format
    }

    /// Pattern, when this spec is an in-place edit
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Placement policy for pattern edits
    pub fn pattern_location(&self) -> PatternLocation {
        self.pattern_location
    }

    /// Desired content value, when the spec manages content at all
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Whether rendering consults the target file's current content
    pub fn needs_existing(&self) -> bool {
        self.pattern.is_some() && self.content.is_some()
    }

    /// Compute the full desired file content.
    ///
    /// Returns `None` when the content value is absent: the file's content
    /// needs no change and the caller should only manage other attributes.
    ///
    /// `existing_text` is only consulted for pattern edits; pass the empty
    /// string when the target file does not exist.
    pub fn render(&self, existing_text: &str) -> Result<Option<String>> {
        let Some(content) = &self.content else {
            return Ok(None);
        };
        let rendered = match &self.pattern {
            Some(pattern) => editor::edit(
                existing_text,
                &content.to_text(),
                pattern,
                self.pattern_location,
            )?,
            None => resolver::resolve(content, self.format)?,
        };
        Ok(Some(rendered))
    }
}

/// Default format resolution.
///
/// A pattern edit bypasses the format system entirely, and raw text content
/// is written verbatim; only structured content consults the path extension.
fn default_format(path: &Path, content: Option<&Content>, has_pattern: bool) -> Format {
    if has_pattern || content.is_some_and(Content::is_text) {
        Format::Text
    } else {
        Format::from_path(path)
    }
}
