//! Schema document model
//!
//! A [`SchemaDocument`] is one source file reduced to the parts the
//! generator consumes: the derived module name and the ordered top-level
//! `simpleType`, `complexType` and `element` definitions. For service
//! descriptions (WSDL) the definitions live in embedded `schema`
//! elements under the `types` section; for plain schemas the document
//! root *is* the `schema` element. Both are handled by collecting every
//! `schema` node in the tree.

use crate::error::Result;
use crate::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Path components like `ver20` mark the alternate protocol generation;
/// their documents get a disambiguating module-name suffix so e.g.
/// `ver10/media.wsdl` and `ver20/media.wsdl` do not collide.
static VERSION_DIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ver2\d$").unwrap());

/// Kind of a source document, which fixes processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A plain schema (`.xsd`)
    Schema,
    /// A service description (`.wsdl`)
    Service,
}

impl DocumentKind {
    /// Classify a path by extension
    pub fn from_path(path: &Path) -> Option<DocumentKind> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("xsd") => Some(DocumentKind::Schema),
            Some("wsdl") => Some(DocumentKind::Service),
            _ => None,
        }
    }
}

/// One source file's definitions, in document order
#[derive(Debug)]
pub struct SchemaDocument {
    /// Source path
    pub path: PathBuf,
    /// Derived module name
    pub module: String,
    /// Top-level `simpleType` nodes
    pub simple_types: Vec<Node>,
    /// Top-level `complexType` nodes
    pub complex_types: Vec<Node>,
    /// Top-level `element` nodes
    pub elements: Vec<Node>,
}

impl SchemaDocument {
    /// Read and ingest a source file
    pub fn load(path: &Path) -> Result<SchemaDocument> {
        let xml = fs::read_to_string(path)?;
        let root = Node::parse(&xml)?;
        Ok(SchemaDocument::from_tree(root, path))
    }

    /// Build a document model from an ingested tree
    pub fn from_tree(root: Node, path: &Path) -> SchemaDocument {
        let mut schemas = Vec::new();
        root.find_all("schema", &mut schemas);

        let mut simple_types = Vec::new();
        let mut complex_types = Vec::new();
        let mut elements = Vec::new();
        for schema in schemas {
            for child in &schema.children {
                match child.tag.as_str() {
                    "simpleType" => simple_types.push(child.clone()),
                    "complexType" => complex_types.push(child.clone()),
                    "element" => elements.push(child.clone()),
                    _ => {}
                }
            }
        }

        SchemaDocument {
            path: path.to_path_buf(),
            module: module_name(path),
            simple_types,
            complex_types,
            elements,
        }
    }
}

/// Derive a module name from a source path: the file stem, with a `2`
/// suffix when the path signals the alternate protocol generation.
pub fn module_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("module")
        .to_string();

    let versioned = path
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .any(|c| VERSION_DIR.is_match(c));
    if versioned {
        format!("{stem}2")
    } else {
        stem
    }
}
