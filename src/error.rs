use std::io;

use thiserror::Error;

/// Library-wide error type for quinegen operations.
///
/// The only failure mode is filesystem I/O: the string transformation is a
/// pure function over in-memory constants and cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}
