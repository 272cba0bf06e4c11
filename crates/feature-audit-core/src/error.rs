//! Error taxonomy for feature auditing.

use std::path::PathBuf;

/// Errors produced while auditing a source tree.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The scan root does not exist.
    #[error("source path not found: {0:?}")]
    SourceNotFound(PathBuf),

    /// A source file has no `Cargo.toml` in any ancestor directory.
    #[error("no Cargo.toml found above {0:?}")]
    ManifestNotFound(PathBuf),

    /// A manifest exists but could not be parsed as TOML.
    #[error("failed to parse {path:?}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::SourceNotFound(PathBuf::from("/missing"));
        assert!(err.to_string().contains("source path not found"));

        let err = AuditError::ManifestNotFound(PathBuf::from("src/lib.rs"));
        assert!(err.to_string().contains("no Cargo.toml found"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AuditError::from(io);
        assert!(err.to_string().contains("io error"));
    }
}
