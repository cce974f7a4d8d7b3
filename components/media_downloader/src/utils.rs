// components/media_downloader/src/utils.rs
use std::io;
use std::path::{Path, PathBuf};

/// Create the directory (and its parents) unless it already exists
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// True when the path exists and is a directory
pub fn is_valid_dir(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Resolve a path against the current directory without requiring it to exist.
///
/// Existing paths are canonicalized (without UNC prefixes on Windows).
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return Ok(canonical);
    }
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
