//! Apply a content spec to a file on disk

use std::path::Path;

use mfile_content::ContentSpec;
use tracing::debug;

use crate::io;
use crate::Result;

/// What applying a spec did to the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The spec carries no content value; file content is not managed
    Skipped,
    /// Rendered content already matched the file; nothing was written
    Unchanged,
    /// Rendered content was written to the file
    Written,
}

/// Render the spec against the file's current content and persist the
/// result when it differs.
///
/// A spec without a content value yields [`Outcome::Skipped`]: the file's
/// content is left alone so the caller can manage its other attributes.
///
/// The current content is read once, as a single snapshot; concurrent
/// writers for the same path must be serialized by the caller.
pub fn apply(path: &Path, spec: &ContentSpec) -> Result<Outcome> {
    let existing = io::read_existing(path)?;
    let Some(rendered) = spec.render(&existing)? else {
        debug!(path = %path.display(), "no content value, leaving file content alone");
        return Ok(Outcome::Skipped);
    };

    if path.exists() && rendered == existing {
        debug!(path = %path.display(), "content up to date");
        return Ok(Outcome::Unchanged);
    }

    io::write_atomic(path, rendered.as_bytes())?;
    debug!(path = %path.display(), bytes = rendered.len(), "content written");
    Ok(Outcome::Written)
}
