//! Add-on manifest parsing.
//!
//! This crate normalizes the two metadata formats an extension may ship
//! with — the legacy RDF/XML `install.rdf` and the WebExtension
//! `manifest.json` — into a single [`AddonDescriptor`] the installer acts
//! on.

pub mod descriptor;
pub mod error;
pub mod rdf;
pub mod web;
pub mod xml;

/// Canonical filename of the legacy RDF manifest inside an add-on.
pub const LEGACY_MANIFEST_FILENAME: &str = "install.rdf";

/// Canonical filename of the WebExtension manifest inside an add-on.
pub const MODERN_MANIFEST_FILENAME: &str = "manifest.json";

pub use descriptor::AddonDescriptor;
pub use error::{Error, Result};
pub use rdf::parse_legacy_manifest;
pub use web::parse_modern_manifest;
pub use xml::resolve_namespace_prefix;
