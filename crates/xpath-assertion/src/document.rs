//! Parsed response documents

use std::fmt;

use roxmltree::{NodeType, ParsingOptions};
use sxd_document::dom::{ChildOfRoot, Document, Element};
use sxd_document::{Package, QName};

use crate::error::{Error, Result};

/// A response body parsed into a namespace-aware XML tree.
///
/// The body is read with roxmltree, which resolves namespaces and expands
/// entities declared in an internal DTD subset, and then copied into an
/// sxd-document package that the XPath engine can walk. Each document owns
/// its package, so nothing is shared between evaluations.
pub struct ResponseDocument {
    package: Package,
}

impl ResponseDocument {
    /// Parse XML text into a document
    pub fn parse(xml: &str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let source = roxmltree::Document::parse_with_options(xml, options)
            .map_err(|e| Error::XmlParse(e.to_string()))?;

        let package = Package::new();
        let document = package.as_document();
        for child in source.root().children() {
            match child.node_type() {
                NodeType::Element => document.root().append_child(copy_element(document, child)),
                NodeType::Comment => document
                    .root()
                    .append_child(document.create_comment(child.text().unwrap_or_default())),
                NodeType::PI => {
                    if let Some(pi) = child.pi() {
                        document
                            .root()
                            .append_child(document.create_processing_instruction(pi.target, pi.value));
                    }
                }
                NodeType::Root | NodeType::Text => {}
            }
        }

        Ok(Self { package })
    }

    /// Decode bytes as UTF-8 and parse them into a document
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = std::str::from_utf8(bytes)?;
        Self::parse(xml)
    }

    /// Get the root element of the document
    pub fn root(&self) -> Option<Element<'_>> {
        self.package
            .as_document()
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(element) => Some(element),
                _ => None,
            })
    }
}

impl fmt::Debug for ResponseDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseDocument")
            .field("root", &self.root().map(|e| e.name().local_part().to_string()))
            .finish_non_exhaustive()
    }
}

fn copy_element<'d>(document: Document<'d>, source: roxmltree::Node<'_, '_>) -> Element<'d> {
    let tag = source.tag_name();
    let element = document.create_element(QName::with_namespace_uri(tag.namespace(), tag.name()));
    if let Some(uri) = tag.namespace() {
        let prefix = source.lookup_prefix(uri).filter(|p| !p.is_empty());
        element.set_preferred_prefix(prefix);
    }

    for attribute in source.attributes() {
        element.set_attribute_value(
            QName::with_namespace_uri(attribute.namespace(), attribute.name()),
            attribute.value(),
        );
    }

    for child in source.children() {
        match child.node_type() {
            NodeType::Element => element.append_child(copy_element(document, child)),
            NodeType::Text => {
                element.append_child(document.create_text(child.text().unwrap_or_default()))
            }
            NodeType::Comment => {
                element.append_child(document.create_comment(child.text().unwrap_or_default()))
            }
            NodeType::PI => {
                if let Some(pi) = child.pi() {
                    element.append_child(document.create_processing_instruction(pi.target, pi.value));
                }
            }
            NodeType::Root => {}
        }
    }

    element
}
