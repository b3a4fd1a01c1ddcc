//! Zip extraction into a fresh directory.

use crate::error::InstallError;
use std::fs::{self, File};
use std::path::Path;
use zip::ZipArchive;

/// Extract every entry of the zip at `archive` into `out_dir`, creating it.
/// Entries whose names would escape `out_dir` make the whole archive fail.
pub fn extract_zip(archive: &Path, out_dir: &Path) -> Result<(), InstallError> {
    let archive_err = |source: zip::result::ZipError| InstallError::Archive {
        path: archive.to_path_buf(),
        source,
    };

    fs::create_dir_all(out_dir)
        .map_err(|e| InstallError::io(format!("create {}", out_dir.display()), e))?;

    let file = File::open(archive)
        .map_err(|e| InstallError::io(format!("open {}", archive.display()), e))?;
    let mut zip = ZipArchive::new(file).map_err(archive_err)?;
    let entries = zip.len();
    zip.extract(out_dir).map_err(archive_err)?;

    tracing::debug!(
        archive = %archive.display(),
        out = %out_dir.display(),
        entries,
        "archive extracted"
    );
    Ok(())
}
