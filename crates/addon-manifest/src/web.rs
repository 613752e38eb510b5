//! WebExtension `manifest.json` parsing

use serde::Deserialize;

use crate::descriptor::AddonDescriptor;
use crate::error::{Error, Result};

/// The subset of a WebExtension manifest the installer cares about.
#[derive(Debug, Deserialize)]
struct WebExtensionManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    applications: Option<Applications>,
}

#[derive(Debug, Deserialize)]
struct Applications {
    #[serde(default)]
    gecko: Option<Gecko>,
}

#[derive(Debug, Deserialize)]
struct Gecko {
    #[serde(default)]
    id: Option<String>,
}

/// Parse WebExtension manifest JSON into a descriptor.
///
/// The identifier must be present at `applications.gecko.id`; a missing
/// segment anywhere along that path is a [`Error::MissingId`]. The
/// `unpack` flag is always `false` for this format, which is never
/// distributed as a resource needing expansion.
pub fn parse_modern_manifest(json_text: &str) -> Result<AddonDescriptor> {
    let manifest: WebExtensionManifest = serde_json::from_str(json_text)?;

    let id = manifest
        .applications
        .and_then(|applications| applications.gecko)
        .and_then(|gecko| gecko.id)
        .filter(|id| !id.is_empty())
        .ok_or(Error::MissingId)?;

    Ok(AddonDescriptor {
        id,
        name: manifest.name.unwrap_or_default(),
        version: manifest.version.unwrap_or_default(),
        unpack: false,
    })
}
