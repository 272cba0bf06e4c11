//! cargo-feature-audit — find Cargo features referenced in code but never
//! declared in the owning crate's manifest.
//!
//! ## Commands
//!
//! - `check`: run the audit and exit non-zero if hidden features are found
//! - `list`: show every feature referenced in source, per crate
//! - `fingerprint`: print the digest of the scanned source set

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feature_audit_core::{fingerprint, init_tracing, walk, AuditConfig, Auditor};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "cargo-feature-audit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit Cargo workspaces for hidden feature references", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON (log lines and report output)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the audit and exit non-zero if hidden features are found
    Check {
        /// Root of the tree to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Path to exclude from the scan (repeatable)
        #[arg(long = "ignore-path")]
        ignored_paths: Vec<PathBuf>,

        /// Feature name to exclude from the audit (repeatable)
        #[arg(long = "ignore-feature")]
        ignored_features: Vec<String>,
    },

    /// List every feature referenced in source, per crate
    List {
        /// Root of the tree to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Path to exclude from the scan (repeatable)
        #[arg(long = "ignore-path")]
        ignored_paths: Vec<PathBuf>,

        /// Feature name to exclude from the audit (repeatable)
        #[arg(long = "ignore-feature")]
        ignored_features: Vec<String>,
    },

    /// Print the digest of the scanned source set
    Fingerprint {
        /// Root of the tree to scan
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // When invoked as `cargo feature-audit`, cargo passes the subcommand
    // name through as the first argument; drop it before parsing.
    let args = std::env::args()
        .enumerate()
        .filter(|(i, arg)| !(*i == 1 && arg == "feature-audit"))
        .map(|(_, arg)| arg);
    let cli = Cli::parse_from(args);

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Check {
            path,
            ignored_paths,
            ignored_features,
        } => cmd_check(path, ignored_paths, ignored_features, cli.json),
        Commands::List {
            path,
            ignored_paths,
            ignored_features,
        } => cmd_list(path, ignored_paths, ignored_features, cli.json),
        Commands::Fingerprint { path } => cmd_fingerprint(&path),
    }
}

/// Run the full audit and fail on hidden features.
fn cmd_check(
    path: PathBuf,
    ignored_paths: Vec<PathBuf>,
    ignored_features: Vec<String>,
    json: bool,
) -> Result<()> {
    let config = AuditConfig::new(path)
        .ignore_paths(ignored_paths)
        .ignore_features(ignored_features);

    let report = Auditor::new(config).run().context("audit failed")?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    if !report.passed() {
        info!(hidden = report.hidden_count(), "hidden features detected");
        std::process::exit(1);
    }
    Ok(())
}

/// Print every used feature per crate, with its declaration status.
fn cmd_list(
    path: PathBuf,
    ignored_paths: Vec<PathBuf>,
    ignored_features: Vec<String>,
    json: bool,
) -> Result<()> {
    let config = AuditConfig::new(path)
        .ignore_paths(ignored_paths)
        .ignore_features(ignored_features);

    let report = Auditor::new(config).run().context("audit failed")?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_used());
    }
    Ok(())
}

/// Print the digest of the scanned source set.
fn cmd_fingerprint(path: &Path) -> Result<()> {
    let config = AuditConfig::new(path);
    let files = walk::collect_rust_files(&config.root, &config.ignored_paths)
        .context("failed to collect source files")?;
    let digest = fingerprint::fingerprint_sources(&config.root, &files)
        .context("failed to fingerprint sources")?;
    println!("{digest}");
    Ok(())
}
