//! Minimal XML element tree and namespace resolution
//!
//! The legacy manifest parser needs a whole-document view of a small XML
//! file, so this module builds an owned tree over `quick-xml` pull events:
//! each node keeps its qualified tag name, attribute list, ordered
//! children, and accumulated text. Consumers index by known fixed tag
//! names only.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// One element of a parsed XML document.
///
/// The node returned by [`parse_document`] is a synthetic document node:
/// an empty tag whose children are the top-level elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Qualified tag name as written, e.g. `em:id` or `Description`.
    pub tag: String,
    /// Attributes in document order, as (qualified name, value) pairs.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Concatenated text content directly under this element.
    pub text: String,
}

impl XmlNode {
    /// First child element with the given qualified tag name.
    pub fn first_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Text of the first child with the given tag, or `""` when absent.
    pub fn child_text(&self, tag: &str) -> &str {
        self.first_child(tag).map_or("", |child| child.text.as_str())
    }
}

/// Parse XML text into an owned element tree.
pub fn parse_document(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut document = XmlNode::default();
    let mut stack: Vec<XmlNode> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(node_from(e).map_err(|message| syntax_error(&reader, message))?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = node_from(e).map_err(|message| syntax_error(&reader, message))?;
                attach(&mut document, &mut stack, node);
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(done) => attach(&mut document, &mut stack, done),
                None => {
                    return Err(syntax_error(&reader, "unexpected closing tag".to_string()));
                }
            },
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| syntax_error(&reader, err.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(syntax_error(&reader, err.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(syntax_error(&reader, "unclosed element".to_string()));
    }

    Ok(document)
}

/// Find the short prefix bound to `namespace_uri` on the document's single
/// root element.
///
/// Returns `"prefix:"` for a prefixed declaration (`xmlns:prefix="uri"`),
/// or `""` when the URI is bound as the default namespace — and also when
/// no declaration matches, in which case lookups under the empty prefix
/// simply find nothing.
pub fn resolve_namespace_prefix(document: &XmlNode, namespace_uri: &str) -> Result<String> {
    if document.children.len() != 1 {
        return Err(Error::RootChildCount {
            count: document.children.len(),
        });
    }

    let root = &document.children[0];
    for (key, value) in &root.attributes {
        let is_declaration = key == "xmlns" || key.starts_with("xmlns:");
        if is_declaration && value == namespace_uri {
            return Ok(match key.split_once(':') {
                Some((_, prefix)) => format!("{prefix}:"),
                None => String::new(),
            });
        }
    }

    Ok(String::new())
}

fn attach(document: &mut XmlNode, stack: &mut [XmlNode], node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.children.push(node),
    }
}

fn node_from(element: &BytesStart<'_>) -> std::result::Result<XmlNode, String> {
    let tag = String::from_utf8_lossy(element.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(XmlNode {
        tag,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn syntax_error(reader: &Reader<&[u8]>, message: String) -> Error {
    Error::XmlSyntax {
        position: reader.buffer_position() as u64,
        message,
    }
}
