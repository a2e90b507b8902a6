//! Zip bundling of a finished export

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Bundle the per-user directory into a single zip archive
///
/// Entries are stored flat (no directory prefix) in name order, so two runs
/// over identical content produce identical entry layouts. An existing
/// archive at the destination is replaced.
pub fn create_archive(user_dir: &Path, archive_path: &Path) -> Result<()> {
    if let Some(parent) = archive_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(user_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    let file = std::fs::File::create(archive_path)?;
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in &entries {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Archive {
                path: archive_path.to_path_buf(),
                reason: format!("entry {} has a non-UTF-8 name", path.display()),
            })?;

        writer
            .start_file(name, options)
            .map_err(|e| Error::Archive {
                path: archive_path.to_path_buf(),
                reason: format!("failed to add entry {name}: {e}"),
            })?;

        let mut input = std::fs::File::open(path)?;
        std::io::copy(&mut input, &mut writer)?;
    }

    writer.finish().map_err(|e| Error::Archive {
        path: archive_path.to_path_buf(),
        reason: format!("failed to finalize archive: {e}"),
    })?;

    info!(
        path = %archive_path.display(),
        entries = entries.len(),
        "archive written"
    );
    Ok(())
}
