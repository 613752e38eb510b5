//! Source discovery
//!
//! Determines whether an add-on source is an expanded directory or a
//! packed archive, finds whichever manifest format is present, and
//! dispatches to the matching parser. The legacy `install.rdf` always
//! takes priority over `manifest.json` when both are present.

use std::path::Path;

use addon_archive::Archive;
use addon_manifest::{
    AddonDescriptor, LEGACY_MANIFEST_FILENAME, MODERN_MANIFEST_FILENAME, parse_legacy_manifest,
    parse_modern_manifest,
};

use crate::error::{Error, Result};

/// Filename extension identifying a packed add-on archive.
pub const PACKED_EXTENSION: &str = "xpi";

/// Produce a normalized descriptor for the add-on at `path`.
///
/// Fails with [`Error::InvalidSource`] when the path is neither a
/// directory nor a `.xpi` file, and with [`Error::MissingManifest`] when
/// the source carries no recognizable manifest.
pub async fn locate(path: &Path) -> Result<AddonDescriptor> {
    let meta = addon_fs::stat(path).await?;
    if meta.is_dir() {
        return locate_in_directory(path).await;
    }
    if path.extension().and_then(|ext| ext.to_str()) == Some(PACKED_EXTENSION) {
        return locate_in_archive(path).await;
    }
    Err(Error::InvalidSource {
        path: path.to_path_buf(),
    })
}

async fn locate_in_directory(dir: &Path) -> Result<AddonDescriptor> {
    let legacy = dir.join(LEGACY_MANIFEST_FILENAME);
    if addon_fs::exists(&legacy).await {
        tracing::debug!("found {} in {}", LEGACY_MANIFEST_FILENAME, dir.display());
        let text = addon_fs::read_to_string(&legacy).await?;
        return parse_legacy_manifest(&text).map_err(|source| malformed(dir, source));
    }

    let modern = dir.join(MODERN_MANIFEST_FILENAME);
    if addon_fs::exists(&modern).await {
        tracing::debug!("found {} in {}", MODERN_MANIFEST_FILENAME, dir.display());
        let text = addon_fs::read_to_string(&modern).await?;
        return parse_modern_manifest(&text).map_err(|source| malformed(dir, source));
    }

    Err(Error::MissingManifest {
        path: dir.to_path_buf(),
    })
}

async fn locate_in_archive(path: &Path) -> Result<AddonDescriptor> {
    let mut archive = Archive::open(path).await?;

    if archive.has(LEGACY_MANIFEST_FILENAME) {
        tracing::debug!("found {} in {}", LEGACY_MANIFEST_FILENAME, path.display());
        let bytes = archive.read_entry(LEGACY_MANIFEST_FILENAME)?;
        let text = String::from_utf8_lossy(&bytes);
        return parse_legacy_manifest(&text).map_err(|source| malformed(path, source));
    }

    if archive.has(MODERN_MANIFEST_FILENAME) {
        tracing::debug!("found {} in {}", MODERN_MANIFEST_FILENAME, path.display());
        let bytes = archive.read_entry(MODERN_MANIFEST_FILENAME)?;
        let text = String::from_utf8_lossy(&bytes);
        return parse_modern_manifest(&text).map_err(|source| malformed(path, source));
    }

    Err(Error::MissingManifest {
        path: path.to_path_buf(),
    })
}

fn malformed(path: &Path, source: addon_manifest::Error) -> Error {
    Error::MalformedManifest {
        path: path.to_path_buf(),
        source,
    }
}
