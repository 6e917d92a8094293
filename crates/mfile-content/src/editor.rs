//! In-place pattern edits of existing file text

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::Result;
use crate::pattern::{Pattern, PatternLocation};

/// Compute the new full text of a file from a pattern edit.
///
/// `existing` is the current file content; callers pass the empty string
/// when the target file does not exist yet. `content` is inserted literally
/// at the match point (no capture-group expansion).
pub fn edit(
    existing: &str,
    content: &str,
    pattern: &Pattern,
    location: PatternLocation,
) -> Result<String> {
    let regex = match pattern {
        // The escape hatch replaces the whole text; placement does not apply.
        Pattern::Transform(f) => return Ok(f(existing)),
        // Pre-compiled patterns are used verbatim, without the trailing-`$`
        // adjustment. Intentional: recompiling with different flags would
        // silently change the caller's pattern.
        Pattern::Compiled(regex) => regex.clone(),
        Pattern::Literal(source) => compile_literal(source, content)?,
    };

    Ok(match location {
        PatternLocation::Replace => regex.replace(existing, NoExpand(content)).into_owned(),
        PatternLocation::ReplaceOrAdd => {
            if regex.is_match(existing) {
                regex.replace(existing, NoExpand(content)).into_owned()
            } else {
                let mut updated = String::with_capacity(existing.len() + content.len());
                updated.push_str(existing);
                updated.push_str(content);
                updated
            }
        }
        PatternLocation::Before => match regex.find(existing) {
            // Skip the insert when the text right before the match already
            // ends with the content, so repeated runs stay no-ops.
            Some(m) if !existing[..m.start()].ends_with(content) => {
                insert_at(existing, m.start(), content)
            }
            _ => existing.to_string(),
        },
        PatternLocation::After => match regex.find(existing) {
            Some(m) if !existing[m.end()..].starts_with(content) => {
                insert_at(existing, m.end(), content)
            }
            _ => existing.to_string(),
        },
    })
}

/// Compile a literal pattern with multiline anchors.
///
/// When the content ends with a newline, a trailing `$` gets `\n?` appended
/// so the anchor may also consume the line's newline. Without this, a
/// replacement that carries its own newline would leave the matched line's
/// newline in place.
fn compile_literal(source: &str, content: &str) -> Result<Regex> {
    let adjusted;
    let source = if content.ends_with('\n') && source.ends_with('$') {
        adjusted = format!("{source}\\n?");
        adjusted.as_str()
    } else {
        source
    };
    Ok(RegexBuilder::new(source).multi_line(true).build()?)
}

/// Rebuild the text as prefix + inserted + suffix around a byte offset
fn insert_at(text: &str, at: usize, content: &str) -> String {
    let mut updated = String::with_capacity(text.len() + content.len());
    updated.push_str(&text[..at]);
    updated.push_str(content);
    updated.push_str(&text[at..]);
    updated
}
