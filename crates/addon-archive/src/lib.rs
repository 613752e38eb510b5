//! Packed-archive collaborator for the add-on installer
//!
//! Wraps the `zip` crate behind the three capabilities the installer
//! needs: open an archive, probe/read individual entries, and expand the
//! whole archive onto disk. Blocking zip work runs on the tokio blocking
//! pool so async callers are never stalled.

pub mod archive;
pub mod error;

pub use archive::{Archive, extract_all};
pub use error::{Error, Result};
