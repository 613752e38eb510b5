//! Filesystem collaborator for the add-on installer
//!
//! Async wrappers over `tokio::fs` used by the source locator and the
//! installer: stat, existence checks, whole-file reads, and the two copy
//! strategies (single file, recursive directory tree).

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{copy_directory, copy_file, exists, read, read_to_string, stat};
