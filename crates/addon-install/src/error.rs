//! Error types for addon-install

use std::path::PathBuf;

/// Result type for addon-install operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or installing an add-on.
///
/// Collaborator I/O failures pass through transparently; they are never
/// reclassified here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A manifest was found but is structurally invalid.
    #[error("malformed manifest in {path}: {source}")]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: addon_manifest::Error,
    },

    /// Neither manifest format is present in the source.
    #[error("no install.rdf or manifest.json found in {path}")]
    MissingManifest { path: PathBuf },

    /// The source path is neither a directory nor a `.xpi` archive.
    #[error("invalid add-on source {path}: not a directory or .xpi archive")]
    InvalidSource { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] addon_fs::Error),

    #[error(transparent)]
    Archive(#[from] addon_archive::Error),
}
