//! Legacy `install.rdf` manifest parsing
//!
//! The legacy format is RDF/XML: metadata fields live in the `em`
//! namespace under an `RDF/Description` node, and both namespaces may be
//! declared under any prefix (or as the default namespace), so field
//! lookups go through the resolved prefixes.

use crate::descriptor::AddonDescriptor;
use crate::error::{Error, Result};
use crate::xml::{self, resolve_namespace_prefix};

/// Namespace URI of the legacy manifest metadata fields.
pub const EM_NAMESPACE: &str = "http://www.mozilla.org/2004/em-rdf#";

/// Namespace URI of the RDF container elements.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Parse legacy RDF/XML manifest text into a descriptor.
pub fn parse_legacy_manifest(xml_text: &str) -> Result<AddonDescriptor> {
    let document = xml::parse_document(xml_text)?;
    let em = resolve_namespace_prefix(&document, EM_NAMESPACE)?;
    let rdf = resolve_namespace_prefix(&document, RDF_NAMESPACE)?;
    tracing::debug!("resolved manifest namespace prefixes em={em:?} rdf={rdf:?}");

    let description = document
        .first_child(&format!("{rdf}RDF"))
        .and_then(|root| root.first_child(&format!("{rdf}Description")))
        .ok_or(Error::MissingDescription)?;

    let id = description.child_text(&format!("{em}id")).to_string();
    if id.is_empty() {
        return Err(Error::MissingId);
    }

    Ok(AddonDescriptor {
        id,
        name: description.child_text(&format!("{em}name")).to_string(),
        version: description.child_text(&format!("{em}version")).to_string(),
        unpack: parse_bool_text(description.child_text(&format!("{em}unpack"))),
    })
}

/// Manifest boolean coercion: only a case-insensitive `"true"` is true;
/// any other text, including absence (empty string), is false.
fn parse_bool_text(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}
