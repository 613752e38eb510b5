//! Zip archive access and extraction

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

/// An opened packed add-on archive.
///
/// Holds the parsed central directory so repeated entry lookups do not
/// re-read the file.
pub struct Archive {
    path: PathBuf,
    inner: ZipArchive<File>,
}

impl Archive {
    /// Open an archive by path and parse its central directory.
    pub async fn open(path: &Path) -> Result<Self> {
        let source = path.to_path_buf();
        let inner = tokio::task::spawn_blocking(move || {
            let file = File::open(&source).map_err(|e| Error::io(&source, e))?;
            ZipArchive::new(file).map_err(|e| Error::zip(&source, e))
        })
        .await??;

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Check whether an entry with the exact given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.inner.index_for_name(name).is_some()
    }

    /// Read the full contents of a single entry.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = match self.inner.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(Error::EntryNotFound {
                    path: self.path.clone(),
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(Error::zip(&self.path, e)),
        };

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(bytes)
    }
}

impl std::fmt::Debug for Archive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archive")
            .field("path", &self.path)
            .field("entries", &self.inner.len())
            .finish()
    }
}

/// Expand all entries of an archive into `dest`, creating it if needed.
///
/// Entries whose names escape the destination (absolute paths or `..`
/// components) are skipped rather than written.
pub async fn extract_all(path: &Path, dest: &Path) -> Result<()> {
    let source = path.to_path_buf();
    let dest = dest.to_path_buf();
    tokio::task::spawn_blocking(move || extract_all_blocking(&source, &dest)).await?
}

fn extract_all_blocking(source: &Path, dest: &Path) -> Result<()> {
    let file = File::open(source).map_err(|e| Error::io(source, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| Error::zip(source, e))?;

    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| Error::zip(source, e))?;
        let Some(entry_path) = entry.enclosed_name() else {
            tracing::warn!("skipping entry with unsafe path: {}", entry.name());
            continue;
        };
        let output = dest.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output).map_err(|e| Error::io(&output, e))?;
        } else {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            let mut out = File::create(&output).map_err(|e| Error::io(&output, e))?;
            std::io::copy(&mut entry, &mut out).map_err(|e| Error::io(&output, e))?;
        }
    }

    tracing::debug!("extracted {} to {}", source.display(), dest.display());
    Ok(())
}
