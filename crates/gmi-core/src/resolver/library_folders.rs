//! Naive scan of Steam's `libraryfolders.vdf` for extra library roots.
//!
//! The file is not parsed as VDF: any line mentioning `path` with at least
//! four `"`-separated tokens contributes its fourth token.

use std::path::PathBuf;

/// Library roots listed in `content`, in file order.
pub fn library_roots(content: &str) -> Vec<PathBuf> {
    content.lines().filter_map(library_root_from_line).collect()
}

fn library_root_from_line(line: &str) -> Option<PathBuf> {
    if !line.contains('"') || !line.contains("path") {
        return None;
    }
    let raw = line.split('"').nth(3)?;
    Some(PathBuf::from(raw.replace("\\\\", "\\")))
}
