//! Feature reference extraction from Rust source text.

use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A single `feature = "..."` reference found in source code.
///
/// Identity is the feature name alone: a feature referenced on many lines
/// of one crate collapses to a single entry, and the first reference found
/// is kept as the example location.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRef {
    /// Feature name as written in the source.
    pub name: String,

    /// File the reference was found in.
    pub path: PathBuf,

    /// 1-based line number of the reference.
    pub line: u64,
}

impl FeatureRef {
    /// Editor-clickable `path:line` location of this reference.
    pub fn location(&self) -> String {
        format!("{}:{}", self.path.display(), self.line)
    }
}

impl PartialEq for FeatureRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FeatureRef {}

impl PartialOrd for FeatureRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeatureRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Matches `feature = "<name>"` with optional whitespace around the `=`.
/// Compiled once per process.
fn feature_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"feature\s*=\s*"(?P<feature>((\w*)-*)*)""#).expect("hard-coded regex compiles")
    })
}

/// Extract every feature name referenced on one line of source text.
///
/// `#[cfg(feature = "foo")]` yields `["foo"]`; a line mentioning several
/// features yields them all, in order of appearance.
pub fn extract_feature_names(line: &str) -> Vec<&str> {
    feature_regex()
        .captures_iter(line)
        .filter_map(|c| c.name("feature"))
        .map(|m| m.as_str())
        .collect()
}

/// Scan one Rust source file for feature references.
///
/// Line numbers are 1-based. Lines that are not valid UTF-8 are skipped.
pub fn scan_file(path: &Path) -> Result<Vec<FeatureRef>> {
    let file = File::open(path)?;
    let mut refs = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        if let Ok(line) = line {
            for name in extract_feature_names(&line) {
                refs.push(FeatureRef {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                    line: idx as u64 + 1,
                });
            }
        }
    }

    Ok(refs)
}
