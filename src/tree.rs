//! Generic schema tree ingestion
//!
//! This module adapts a parsed XML document (via roxmltree) into the tree
//! shape the rest of the compiler expects:
//!
//! - Every node carries its XML attributes in a metadata map (`attrs`),
//!   separate from child-element content, so a schema attribute named
//!   `name` or `use` can never collide with a child element of the same
//!   tag.
//! - Every child element is part of an ordered sequence (`children`),
//!   even when it occurs exactly once. Downstream logic indexes and maps
//!   over these sequences uniformly and never special-cases singletons.
//!
//! Tag names are stored with their namespace prefix stripped; prefixes
//! only matter on attribute *values* (type references), which are kept
//! verbatim.

use crate::error::Result;
use indexmap::IndexMap;

/// A single element of the ingested schema tree
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Local (prefix-stripped) tag name
    pub tag: String,
    /// Attribute metadata, in document order
    pub attrs: IndexMap<String, String>,
    /// Child elements, in document order
    pub children: Vec<Node>,
    /// Concatenated text content of this element, if any
    pub text: Option<String>,
}

impl Node {
    /// Parse an XML string into a tree rooted at the document element
    pub fn parse(xml: &str) -> Result<Node> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Node::from_element(doc.root_element()))
    }

    fn from_element(el: roxmltree::Node<'_, '_>) -> Node {
        let mut attrs = IndexMap::new();
        for attr in el.attributes() {
            attrs.insert(attr.name().to_string(), attr.value().to_string());
        }

        let mut children = Vec::new();
        let mut text = String::new();
        for child in el.children() {
            if child.is_element() {
                children.push(Node::from_element(child));
            } else if child.is_text() {
                if let Some(t) = child.text() {
                    text.push_str(t);
                }
            }
        }

        Node {
            tag: el.tag_name().name().to_string(),
            attrs,
            children,
            text: if text.trim().is_empty() { None } else { Some(text) },
        }
    }

    /// Look up an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    /// Iterate over the child sequence with a given tag
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// First child with a given tag, if present
    pub fn first_child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Depth-first collection of every descendant (including self) with a
    /// given tag. Used to pull nested `schema` elements out of WSDL
    /// `types` sections.
    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Node>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(tag, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_child_is_still_a_sequence() {
        let node = Node::parse(r#"<a><b name="x"/></a>"#).unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children_named("b").count(), 1);
    }

    #[test]
    fn test_attrs_separate_from_children() {
        // An attribute `use` and a child element `use` must not collide.
        let node = Node::parse(r#"<a use="optional"><use/></a>"#).unwrap();
        assert_eq!(node.attr("use"), Some("optional"));
        assert!(node.first_child("use").is_some());
    }

    #[test]
    fn test_tag_prefix_stripped() {
        let node =
            Node::parse(r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"/>"#).unwrap();
        assert_eq!(node.tag, "schema");
    }

    #[test]
    fn test_text_content() {
        let node = Node::parse("<doc>Some documentation</doc>").unwrap();
        assert_eq!(node.text.as_deref(), Some("Some documentation"));
    }

    #[test]
    fn test_find_all_nested() {
        let node = Node::parse(r#"<a><b><c/><b><c/></b></b></a>"#).unwrap();
        let mut found = Vec::new();
        node.find_all("c", &mut found);
        assert_eq!(found.len(), 2);
    }
}
