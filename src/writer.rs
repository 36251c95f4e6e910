//! Effectful side of the generator: writing artifacts to disk.

use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Write `content` to `path` verbatim, creating the file or overwriting it.
///
/// No trailing transformation is applied. I/O failures propagate to the
/// caller; nothing is retried or cleaned up here.
pub fn write_artifact(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content)?;
    Ok(())
}
