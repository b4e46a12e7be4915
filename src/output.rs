use crate::error::Result;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Replace `path` with `contents` in one step: write a sibling temp file
/// and rename it over the target. A reader opening the file mid-refresh
/// sees either the old page or the new one, never a truncated mix.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_sibling(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}

/// Temp file next to the target so the rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
