//! Content generation for managed files
//!
//! Renders a target file's full content from a desired value (plain text,
//! JSON, or YAML) or computes an in-place pattern edit of the file's
//! existing text. The surrounding management layer decides whether and when
//! a file changes; this crate only computes the exact bytes.

pub mod content;
pub mod editor;
pub mod error;
pub mod format;
pub mod pattern;
pub mod resolver;
pub mod spec;

pub use content::Content;
pub use error::{Error, Result};
pub use format::Format;
pub use pattern::{Pattern, PatternLocation};
pub use spec::ContentSpec;
