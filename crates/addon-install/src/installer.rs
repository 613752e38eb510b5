//! The installation decision
//!
//! | source kind    | unpack | action                                   |
//! |----------------|--------|------------------------------------------|
//! | packed archive | false  | copy archive verbatim to `<dir>/<id>.xpi`|
//! | packed archive | true   | expand archive into `<dir>/<id>`         |
//! | directory      | —      | recursive copy to `<dir>/<id>`           |

use std::path::Path;

use crate::error::Result;
use crate::locator::{PACKED_EXTENSION, locate};

/// Install the extension at `extension_path` into `install_dir`, returning
/// its resolved identifier.
///
/// Each call is independent; concurrent installs against different
/// destination stems are safe. Failures in the underlying copy or
/// extraction propagate unchanged.
pub async fn install(extension_path: &Path, install_dir: &Path) -> Result<String> {
    let descriptor = locate(extension_path).await?;
    let stem = install_dir.join(&descriptor.id);
    let meta = addon_fs::stat(extension_path).await?;

    if meta.is_dir() {
        tracing::debug!(
            "installing directory {} as {}",
            extension_path.display(),
            descriptor.id
        );
        addon_fs::copy_directory(extension_path, &stem).await?;
    } else if descriptor.unpack {
        tracing::debug!(
            "unpacking archive {} as {}",
            extension_path.display(),
            descriptor.id
        );
        addon_archive::extract_all(extension_path, &stem).await?;
    } else {
        // Ids routinely contain dots (`addon@example.com`), so append the
        // extension instead of using Path::with_extension.
        let packed = install_dir.join(format!("{}.{}", descriptor.id, PACKED_EXTENSION));
        tracing::debug!(
            "installing packed archive {} as {}",
            extension_path.display(),
            descriptor.id
        );
        addon_fs::copy_file(extension_path, &packed).await?;
    }

    Ok(descriptor.id)
}
