//! Reads the cumulative runtime counter of the NPU.
//!
//! The kernel exposes this through the runtime PM attributes of the device,
//! documented at <https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-devices-power>.
//! The attribute contains the number of milliseconds the device has spent in
//! the active state.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::error::{RuntimeError, RuntimeResult};

/// Reads the raw runtime counter from a fixed path.
///
/// This holds no state besides the path; every call to [`RuntimeReader::read`]
/// goes to the filesystem.
#[derive(Clone, Debug)]
pub struct RuntimeReader {
    path: PathBuf,
}

impl RuntimeReader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The path this reader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the counter, in milliseconds.
    ///
    /// This does not retry; callers decide what to do on failure.
    pub fn read(&self) -> RuntimeResult<u64> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|err| RuntimeError::from_io(err, self.path.clone()))?;

        parse_runtime(&contents)
    }
}

/// Parses the contents of a runtime attribute, ignoring surrounding whitespace.
fn parse_runtime(contents: &str) -> RuntimeResult<u64> {
    let value = contents.trim();

    // `u64::from_str` allows a leading '+', which sysfs never writes.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RuntimeError::Parsing(
            format!("'{value}' is not a non-negative integer").into(),
        ));
    }

    value
        .parse::<u64>()
        .map_err(|err| RuntimeError::Parsing(format!("'{value}' is out of range, {err}").into()))
}
