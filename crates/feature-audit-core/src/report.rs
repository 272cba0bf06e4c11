//! Audit report assembly and rendering.

use crate::audit::CrateAudit;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Complete result of one audit run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Crates with at least one in-source feature reference.
    pub crates: Vec<CrateAudit>,

    /// Digest of the scanned source set.
    pub fingerprint: String,

    /// When the audit ran.
    pub generated_at: DateTime<Utc>,
}

impl AuditReport {
    pub fn new(crates: Vec<CrateAudit>, fingerprint: String) -> Self {
        Self {
            crates,
            fingerprint,
            generated_at: Utc::now(),
        }
    }

    /// Whether the audit found no hidden features.
    pub fn passed(&self) -> bool {
        self.crates.iter().all(|c| c.hidden.is_empty())
    }

    /// Total number of hidden features across all crates.
    pub fn hidden_count(&self) -> usize {
        self.crates.iter().map(|c| c.hidden.len()).sum()
    }

    /// Human-readable rendering of the offending crates.
    ///
    /// One block per crate with hidden features: the manifest path, then
    /// one line per hidden feature with an editor-clickable location.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for crate_audit in &self.crates {
            if crate_audit.hidden.is_empty() {
                continue;
            }
            out.push_str(&format!("{}\n", crate_audit.manifest_path.display()));
            for feature in &crate_audit.hidden {
                out.push_str(&format!("\t{}\t{}\n", feature.name, feature.location()));
            }
        }

        if self.passed() {
            out.push_str("no hidden features found\n");
        } else {
            out.push_str(&format!(
                "{} hidden feature(s) detected\n",
                self.hidden_count()
            ));
        }
        out
    }

    /// Survey rendering: every used feature per crate, hidden or not.
    pub fn render_used(&self) -> String {
        let mut out = String::new();

        for crate_audit in &self.crates {
            out.push_str(&format!("{}\n", crate_audit.manifest_path.display()));
            for feature in &crate_audit.used {
                let marker = if crate_audit.declared.contains(&feature.name) {
                    "declared"
                } else {
                    "hidden"
                };
                out.push_str(&format!(
                    "\t{}\t{}\t{}\n",
                    feature.name,
                    marker,
                    feature.location()
                ));
            }
        }

        if self.crates.is_empty() {
            out.push_str("no feature references found\n");
        }
        out
    }

    /// Serialize the full report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::FeatureRef;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn feature_ref(name: &str, line: u64) -> FeatureRef {
        FeatureRef {
            name: name.to_string(),
            path: PathBuf::from("src/lib.rs"),
            line,
        }
    }

    fn crate_audit(hidden: &[(&str, u64)], declared: &[&str]) -> CrateAudit {
        let hidden: BTreeSet<FeatureRef> =
            hidden.iter().map(|(n, l)| feature_ref(n, *l)).collect();
        let declared: BTreeSet<String> = declared.iter().map(|s| (*s).to_string()).collect();
        let mut used = hidden.clone();
        for name in &declared {
            used.insert(feature_ref(name, 1));
        }
        CrateAudit {
            manifest_path: PathBuf::from("Cargo.toml"),
            used,
            declared,
            hidden,
        }
    }

    #[test]
    fn empty_report_passes() {
        let report = AuditReport::new(vec![], "digest".to_string());
        assert!(report.passed());
        assert_eq!(report.hidden_count(), 0);
        assert!(report.render_text().contains("no hidden features found"));
    }

    #[test]
    fn hidden_features_fail_the_report() {
        let report = AuditReport::new(
            vec![crate_audit(&[("ghost", 3)], &["real"])],
            "digest".to_string(),
        );
        assert!(!report.passed());
        assert_eq!(report.hidden_count(), 1);

        let text = report.render_text();
        assert!(text.contains("ghost"));
        assert!(text.contains("src/lib.rs:3"));
        assert!(text.contains("1 hidden feature(s) detected"));
    }

    #[test]
    fn hidden_count_sums_across_crates() {
        let report = AuditReport::new(
            vec![
                crate_audit(&[("a", 1)], &[]),
                crate_audit(&[("b", 2), ("c", 3)], &[]),
            ],
            "digest".to_string(),
        );
        assert_eq!(report.hidden_count(), 3);
    }

    #[test]
    fn render_used_marks_declared_and_hidden() {
        let report = AuditReport::new(
            vec![crate_audit(&[("ghost", 3)], &["real"])],
            "digest".to_string(),
        );
        let text = report.render_used();
        assert!(text.contains("ghost\thidden"));
        assert!(text.contains("real\tdeclared"));
    }

    #[test]
    fn json_round_trips_field_names() {
        let report = AuditReport::new(
            vec![crate_audit(&[("ghost", 3)], &[])],
            "digest".to_string(),
        );
        let json = report.to_json().unwrap();
        assert!(json.contains("\"crates\""));
        assert!(json.contains("\"fingerprint\""));
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"ghost\""));
    }
}
