//! Ensures all workspace crates inherit the workspace version.

use std::path::Path;

/// Read the workspace version from the root Cargo.toml.
fn workspace_version() -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap();
    let root_toml = std::fs::read_to_string(root.join("Cargo.toml")).unwrap();
    let doc: toml::Value = root_toml.parse().unwrap();
    doc["workspace"]["package"]["version"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn all_crates_use_workspace_version() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap();

    let crates = ["crates/feature-audit-core", "crates/feature-audit-cli"];

    for member in crates {
        let manifest = workspace_root.join(member).join("Cargo.toml");
        let raw = std::fs::read_to_string(&manifest).unwrap();
        let doc: toml::Value = raw.parse().unwrap();

        let version = &doc["package"]["version"];
        let inherits = version
            .as_table()
            .and_then(|t| t.get("workspace"))
            .and_then(toml::Value::as_bool)
            == Some(true);
        assert!(
            inherits,
            "{member} must use version.workspace = true, found {version:?}"
        );
    }
}

#[test]
fn compiled_version_matches_workspace() {
    assert_eq!(env!("CARGO_PKG_VERSION"), workspace_version());
}
