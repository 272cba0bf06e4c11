//! Cargo manifest discovery and feature table parsing.

use crate::error::{AuditError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Find the `Cargo.toml` that owns a source path.
///
/// Walks parent directories upward starting at `start` and returns the
/// first `Cargo.toml` encountered, or `None` if the filesystem root is
/// reached first.
pub fn find_owning_manifest(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join("Cargo.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Parse the `[features]` table of a manifest into a set of feature names.
///
/// An absent table yields the empty set. An unreadable or unparsable
/// manifest is an error; the audit never reports against a manifest it
/// could not read.
pub fn declared_features(manifest_path: &Path) -> Result<BTreeSet<String>> {
    let raw = std::fs::read_to_string(manifest_path)?;
    let doc: toml::Value = raw.parse().map_err(|source| AuditError::ManifestParse {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    let mut features = BTreeSet::new();
    if let Some(toml::Value::Table(table)) = doc.get("features") {
        for name in table.keys() {
            features.insert(name.clone());
        }
    }
    Ok(features)
}
