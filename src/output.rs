//! Writes the rendered source to its destination.

use std::fs;
use std::io::Write;

use log::debug;

use crate::config::OutputTarget;
use crate::error::{Error, Result};

/// Writes `content` to `target`, using `stdout` for [`OutputTarget::Stdout`].
/// A target file is created or overwritten.
pub fn write_output(target: &OutputTarget, content: &str, stdout: &mut dyn Write) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            stdout.write_all(content.as_bytes()).map_err(Error::IoError)?;
            stdout.flush().map_err(Error::IoError)
        }
        OutputTarget::File(path) => {
            debug!("Writing file: {}", path.display());
            fs::write(path, content).map_err(Error::IoError)
        }
    }
}
