//! Writing of generated files that leaves up to date files untouched

use crate::error::WriteError;
use log::debug;
use std::fs;
use std::path::Path;

/// Writes `content` to `path` unless the file already holds exactly that content.
///
/// A missing or unreadable file counts as out of date. Returns whether the file was written.
pub fn update_file<P: AsRef<Path>>(path: P, content: &str) -> Result<bool, WriteError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            debug!("{path:?} is up to date");
            return Ok(false);
        }
        Ok(_) => debug!("{path:?} is out of date"),
        Err(e) => debug!("{path:?} could not be read ({e}), writing it"),
    }

    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, content).map_err(wrap)?;
    debug!("wrote {} bytes to {path:?}", content.len());
    Ok(true)
}
