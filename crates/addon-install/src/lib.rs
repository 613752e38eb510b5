//! Add-on installation.
//!
//! The public surface is a single operation: [`install`] discovers the
//! on-disk form of an extension (packed `.xpi` archive or expanded
//! directory), normalizes its manifest into an
//! [`AddonDescriptor`](addon_manifest::AddonDescriptor), and places the
//! extension into the target directory under its resolved identifier.

pub mod error;
pub mod installer;
pub mod locator;

pub use error::{Error, Result};
pub use installer::install;
pub use locator::{PACKED_EXTENSION, locate};
