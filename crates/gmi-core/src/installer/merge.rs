//! Merge an extracted tree into the addons directory, overwriting on conflict.

use crate::error::InstallError;
use std::fs;
use std::path::Path;

/// Copy every top-level entry of `src` into `dest`.
///
/// Directories are merged recursively (existing directories are kept, files
/// inside are overwritten); files replace any same-named file in `dest`.
/// Returns the number of files copied.
pub fn merge_into(src: &Path, dest: &Path) -> Result<u64, InstallError> {
    let entries =
        fs::read_dir(src).map_err(|e| InstallError::io(format!("read {}", src.display()), e))?;
    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| InstallError::io(format!("read {}", src.display()), e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copied += merge_dir(&from, &to)?;
        } else {
            copy_file(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn merge_dir(src: &Path, dest: &Path) -> Result<u64, InstallError> {
    fs::create_dir_all(dest)
        .map_err(|e| InstallError::io(format!("create {}", dest.display()), e))?;
    merge_into(src, dest)
}

fn copy_file(src: &Path, dest: &Path) -> Result<(), InstallError> {
    fs::copy(src, dest)
        .map_err(|e| InstallError::io(format!("copy {} -> {}", src.display(), dest.display()), e))?;
    Ok(())
}
