//! Async filesystem operations
//!
//! Each helper maps the underlying `std::io::Error` to an [`Error::Io`]
//! carrying the offending path. No retries are performed; transient
//! failures surface immediately to the caller.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Query metadata for a path (follows symlinks).
pub async fn stat(path: &Path) -> Result<Metadata> {
    tokio::fs::metadata(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Check whether a path exists.
///
/// Permission errors and other stat failures are treated as "does not
/// exist"; callers that need the distinction should use [`stat`].
pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Read the full contents of a file as bytes.
pub async fn read(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| Error::io(path, e))
}

/// Read the full contents of a file as UTF-8 text.
pub async fn read_to_string(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Copy a single file, creating missing parent directories of the
/// destination first.
pub async fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }
    tokio::fs::copy(src, dst)
        .await
        .map_err(|e| Error::io(dst, e))?;
    Ok(())
}

/// Recursively copy a directory tree.
///
/// Uses an explicit work queue rather than recursion so the future stays
/// boxless. Symlinks are followed: a link to a directory is walked, a
/// link to a file is copied as a regular file.
pub async fn copy_directory(src: &Path, dst: &Path) -> Result<()> {
    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(src.to_path_buf(), dst.to_path_buf())];

    while let Some((from, to)) = pending.pop() {
        tokio::fs::create_dir_all(&to)
            .await
            .map_err(|e| Error::io(&to, e))?;

        let mut entries = tokio::fs::read_dir(&from)
            .await
            .map_err(|e| Error::io(&from, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(&from, e))?
        {
            let target = to.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io(entry.path(), e))?;
            // DirEntry::file_type does not follow symlinks; stat the
            // target so linked directories are walked too.
            let is_dir = if file_type.is_symlink() {
                tokio::fs::metadata(entry.path())
                    .await
                    .map_err(|e| Error::io(entry.path(), e))?
                    .is_dir()
            } else {
                file_type.is_dir()
            };
            if is_dir {
                pending.push((entry.path(), target));
            } else {
                tokio::fs::copy(entry.path(), &target)
                    .await
                    .map_err(|e| Error::io(&target, e))?;
            }
        }
    }

    tracing::debug!("copied directory {} to {}", src.display(), dst.display());
    Ok(())
}
