use anyhow::{anyhow, Result};
use std::fs::File;
use std::path::Path;

/// Opens a file, annotating failures with what the file was for (e.g.
/// `project`).
pub fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}
