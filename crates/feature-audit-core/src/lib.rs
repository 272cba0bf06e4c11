//! feature-audit-core — detect Cargo features referenced in source code
//! but never declared in the owning crate's manifest.
//!
//! A `#[cfg(feature = "x")]` whose `x` is missing from the crate's
//! `[features]` table can never be enabled, so the guarded code silently
//! compiles out. The audit walks a source tree, extracts feature
//! references, resolves each file's owning `Cargo.toml` and reports the
//! difference between used and declared features per crate.

pub mod audit;
pub mod error;
pub mod fingerprint;
pub mod manifest;
pub mod report;
pub mod scan;
pub mod telemetry;
pub mod walk;

// Re-export key types
pub use audit::{AuditConfig, Auditor, CrateAudit};
pub use error::{AuditError, Result};
pub use report::AuditReport;
pub use scan::FeatureRef;
pub use telemetry::init_tracing;
