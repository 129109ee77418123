//! Error code related to reading the runtime counter.

use std::{borrow::Cow, io, path::PathBuf};

use thiserror::Error;

/// A type alias for handling counter-reading errors.
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

/// The errors that can happen while reading the runtime counter.
///
/// All of these are recoverable; a later read may succeed once the device
/// comes back.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The counter path does not exist, e.g. the device is absent or the
    /// driver is unloaded.
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),
    /// The counter path exists but is not readable by the current user.
    #[error("permission denied while reading '{}'", .0.display())]
    PermissionDenied(PathBuf),
    /// The counter's contents were not a non-negative integer.
    #[error("Parsing error, {0}")]
    Parsing(Cow<'static, str>),
    /// Any other IO failure.
    #[error(transparent)]
    InvalidIo(io::Error),
}

impl RuntimeError {
    /// Classifies an [`io::Error`] that happened while reading `path`.
    pub(crate) fn from_io(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => RuntimeError::NotFound(path),
            io::ErrorKind::PermissionDenied => RuntimeError::PermissionDenied(path),
            io::ErrorKind::InvalidData => RuntimeError::Parsing(err.to_string().into()),
            _ => RuntimeError::InvalidIo(err),
        }
    }

    /// Whether this is the same kind of error as `other`, ignoring the payload.
    pub fn same_kind(&self, other: &RuntimeError) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
