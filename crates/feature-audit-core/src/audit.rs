//! Audit pipeline: group feature references by owning crate and compute
//! the hidden set for each.

use crate::error::{AuditError, Result};
use crate::fingerprint::fingerprint_sources;
use crate::manifest;
use crate::report::AuditReport;
use crate::scan::{self, FeatureRef};
use crate::walk;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Audit configuration.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Root of the tree to scan.
    pub root: PathBuf,

    /// Paths excluded from the scan. `<root>/target` is always present.
    pub ignored_paths: HashSet<PathBuf>,

    /// Feature names excluded from every set in the report.
    pub ignored_features: HashSet<String>,
}

impl AuditConfig {
    /// Create a configuration for the given scan root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut ignored_paths = HashSet::new();
        ignored_paths.insert(root.join("target"));
        Self {
            root,
            ignored_paths,
            ignored_features: HashSet::new(),
        }
    }

    /// Add paths to exclude from the scan.
    pub fn ignore_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.ignored_paths.extend(paths);
        self
    }

    /// Add feature names to exclude from the audit.
    pub fn ignore_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.ignored_features.extend(features);
        self
    }
}

/// Per-crate audit result.
///
/// Only crates with at least one in-source feature reference are audited;
/// a crate that declares features but never references any does not
/// appear in a report.
#[derive(Debug, Clone, Serialize)]
pub struct CrateAudit {
    /// Path to the crate's `Cargo.toml`.
    pub manifest_path: PathBuf,

    /// Features referenced in the crate's source files.
    pub used: BTreeSet<FeatureRef>,

    /// Features declared in the manifest's `[features]` table.
    pub declared: BTreeSet<String>,

    /// Used features with no matching declaration.
    pub hidden: BTreeSet<FeatureRef>,
}

/// Runs the audit pipeline over a source tree.
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Execute the full audit: walk the tree, scan every Rust file, group
    /// references under their owning manifest, resolve declared features
    /// and compute hidden sets.
    pub fn run(&self) -> Result<AuditReport> {
        let files = walk::collect_rust_files(&self.config.root, &self.config.ignored_paths)?;
        info!(
            root = %self.config.root.display(),
            files = files.len(),
            "scanning source tree"
        );

        let mut crates: BTreeMap<PathBuf, CrateAudit> = BTreeMap::new();
        let mut manifest_cache: HashMap<PathBuf, PathBuf> = HashMap::new();

        for file in &files {
            for feature_ref in scan::scan_file(file)? {
                if self.config.ignored_features.contains(&feature_ref.name) {
                    continue;
                }
                let manifest_path = owning_manifest(file, &mut manifest_cache)?;
                let entry = crates
                    .entry(manifest_path.clone())
                    .or_insert_with(|| CrateAudit {
                        manifest_path,
                        used: BTreeSet::new(),
                        declared: BTreeSet::new(),
                        hidden: BTreeSet::new(),
                    });
                // Name-identity set: the first reference to a feature wins.
                entry.used.insert(feature_ref);
            }
        }

        for audit in crates.values_mut() {
            let declared = manifest::declared_features(&audit.manifest_path)?;
            debug!(
                manifest = %audit.manifest_path.display(),
                declared = declared.len(),
                used = audit.used.len(),
                "resolved crate features"
            );
            audit.declared = declared
                .into_iter()
                .filter(|f| !self.config.ignored_features.contains(f))
                .collect();
            audit.hidden = audit
                .used
                .iter()
                .filter(|f| !audit.declared.contains(&f.name))
                .cloned()
                .collect();
        }

        let fingerprint = fingerprint_sources(&self.config.root, &files)?;
        let report = AuditReport::new(crates.into_values().collect(), fingerprint);
        info!(
            crates = report.crates.len(),
            hidden = report.hidden_count(),
            "audit complete"
        );
        Ok(report)
    }
}

/// Resolve the manifest owning `file`, memoized per parent directory.
fn owning_manifest(file: &Path, cache: &mut HashMap<PathBuf, PathBuf>) -> Result<PathBuf> {
    let parent = file
        .parent()
        .ok_or_else(|| AuditError::ManifestNotFound(file.to_path_buf()))?;

    if let Some(found) = cache.get(parent) {
        return Ok(found.clone());
    }

    let found = manifest::find_owning_manifest(parent)
        .ok_or_else(|| AuditError::ManifestNotFound(file.to_path_buf()))?;
    cache.insert(parent.to_path_buf(), found.clone());
    Ok(found)
}
