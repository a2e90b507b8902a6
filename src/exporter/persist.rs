//! Persistence of normalized documents into the per-user directory

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the numeric summary document
pub const SUMMARY_FILE: &str = "summary.json";

/// Delete and recreate the per-user directory
///
/// A re-run must not leave stale files from a previous export, so the whole
/// directory is replaced rather than written over.
pub fn reset_user_dir(user_dir: &Path) -> Result<()> {
    if user_dir.exists() {
        debug!(path = %user_dir.display(), "removing previous export");
        std::fs::remove_dir_all(user_dir)?;
    }
    std::fs::create_dir_all(user_dir)?;
    Ok(())
}

/// Write one document as pretty-printed JSON
pub fn write_document<T: Serialize>(
    user_dir: &Path,
    file_name: &str,
    document: &T,
) -> Result<PathBuf> {
    let path = user_dir.join(file_name);
    let json = serde_json::to_vec_pretty(document)?;
    std::fs::write(&path, json)?;
    debug!(path = %path.display(), "document written");
    Ok(path)
}
