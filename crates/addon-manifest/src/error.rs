//! Error types for addon-manifest

/// Result type for addon-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a manifest can be structurally invalid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The XML text could not be parsed at all.
    #[error("XML syntax error at position {position}: {message}")]
    XmlSyntax { position: u64, message: String },

    /// The document root did not have exactly one child element.
    #[error("manifest root must have exactly one element, found {count}")]
    RootChildCount { count: usize },

    /// The RDF/Description node holding the metadata fields is absent.
    #[error("could not find RDF Description node in manifest")]
    MissingDescription,

    /// No resolvable add-on ID in the manifest. Never defaulted.
    #[error("could not find add-on ID in manifest")]
    MissingId,

    /// The WebExtension manifest is not valid JSON.
    #[error("failed to parse manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
}
