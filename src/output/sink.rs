//! Where encoded tables end up.

use std::io;
use std::path::Path;

/// Persists encoded table text to a named destination.
///
/// Each call is independent: a failure for one destination says nothing
/// about the next.
pub trait Sink {
    fn persist(&mut self, destination: &Path, contents: &str) -> io::Result<()>;
}

/// Writes tables to the filesystem, creating parent directories.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSink;

impl Sink for FsSink {
    fn persist(&mut self, destination: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(destination, contents)
    }
}
