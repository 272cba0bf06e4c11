//! Deterministic digest of a scanned source set.

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Compute a SHA-256 digest over the given source files.
///
/// Each file contributes its path relative to `root` followed by its
/// normalized content, separated by NUL bytes, in the (already sorted)
/// order given. Any change to the file set, file names or file contents
/// changes the digest; two identical trees produce the same digest on any
/// machine.
pub fn fingerprint_sources(root: &Path, files: &[PathBuf]) -> Result<String> {
    let mut hasher = Sha256::new();

    for path in files {
        let relative = path.strip_prefix(root).unwrap_or(path);
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update(b"\0");

        let content = std::fs::read(path)?;
        hasher.update(normalize_source(&content));
        hasher.update(b"\0");
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Normalize source bytes: CRLF to LF, trailing whitespace stripped from
/// each line, single trailing newline.
fn normalize_source(content: &[u8]) -> Vec<u8> {
    let text = String::from_utf8_lossy(content);
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.into_bytes()
}
