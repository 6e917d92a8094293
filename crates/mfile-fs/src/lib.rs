//! Filesystem collaborator for managed file content
//!
//! Reads the target's current content as a single snapshot and persists
//! rendered buffers with write-to-temp-then-rename. Content computation
//! itself lives in `mfile-content`; this crate only moves bytes.

pub mod apply;
pub mod error;
pub mod io;

pub use apply::{apply, Outcome};
pub use error::{Error, Result};
