//! Source tree traversal.

use crate::error::{AuditError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Recursively collect Rust source files under `root`.
///
/// Hidden entries (names starting with `.`), `target` directories and any
/// path in `ignored_paths` are skipped. The result is sorted so callers
/// see the same ordering on every machine.
///
/// A `root` that is itself a file is returned as-is.
pub fn collect_rust_files(root: &Path, ignored_paths: &HashSet<PathBuf>) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(AuditError::SourceNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    collect_recursive(root, ignored_paths, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_recursive(
    dir: &Path,
    ignored: &HashSet<PathBuf>,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if ignored.contains(&path) {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name == "target" {
            continue;
        }

        if path.is_dir() {
            collect_recursive(&path, ignored, files)?;
        } else if path.extension().map_or(false, |ext| ext == "rs") {
            files.push(path);
        }
    }

    Ok(())
}
