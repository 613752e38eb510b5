//! Normalized add-on metadata

use serde::Serialize;

/// Normalized result of parsing any supported manifest format.
///
/// Constructed once per install, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonDescriptor {
    /// Stable identifier of the extension. Always non-empty; used as the
    /// destination filename/directory stem.
    pub id: String,
    /// Human-readable display name; may be empty.
    pub name: String,
    /// Free-form version string; may be empty.
    pub version: String,
    /// Whether the archive's contents must be expanded onto disk rather
    /// than installed packed. Always `false` for WebExtension manifests.
    pub unpack: bool,
}
