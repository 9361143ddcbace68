//! Simple type translation
//!
//! An XSD `simpleType` becomes exactly one alias declaration:
//!
//! - an enumeration restriction becomes an alias to a literal union,
//!   order preserved;
//! - a plain restriction becomes an alias to its mapped base primitive;
//! - a list becomes a homogeneous array alias over its item type.

use crate::annotations::doc_lines;
use crate::ir::Declaration;
use crate::names::clean_name;
use crate::primitives::map_primitive;
use crate::registry::ModuleCx;
use crate::tree::Node;

/// Variety of a simple type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleVariety {
    /// Ordered literal string constants
    Enumeration(Vec<String>),
    /// Restriction to a base primitive (qualified name)
    Restriction(Option<String>),
    /// Homogeneous list of an item type (qualified name)
    List(Option<String>),
}

/// A parsed `simpleType` definition
#[derive(Debug, Clone)]
pub struct SimpleTypeDef {
    /// Type name as written in the schema
    pub name: String,
    /// Exactly one variety
    pub variety: SimpleVariety,
    /// Cleaned documentation lines
    pub doc: Option<Vec<String>>,
}

impl SimpleTypeDef {
    /// Parse a `simpleType` node. Unnamed simple types carry no
    /// declaration of their own and yield `None`.
    pub fn from_node(node: &Node) -> Option<SimpleTypeDef> {
        let name = node.attr("name")?.to_string();
        let doc = doc_lines(node);

        let variety = if let Some(restriction) = node.first_child("restriction") {
            let literals: Vec<String> = restriction
                .children_named("enumeration")
                .filter_map(|e| e.attr("value"))
                .map(|v| v.to_string())
                .collect();
            if literals.is_empty() {
                SimpleVariety::Restriction(restriction.attr("base").map(|b| b.to_string()))
            } else {
                SimpleVariety::Enumeration(literals)
            }
        } else if let Some(list) = node.first_child("list") {
            SimpleVariety::List(list.attr("itemType").map(|t| t.to_string()))
        } else {
            SimpleVariety::Restriction(None)
        };

        Some(SimpleTypeDef { name, variety, doc })
    }
}

/// Translate a simple type into its alias declaration
pub fn translate(def: &SimpleTypeDef, cx: &mut ModuleCx) -> Declaration {
    let name = clean_name(&def.name);
    match &def.variety {
        SimpleVariety::Enumeration(literals) => Declaration::UnionAlias {
            name,
            literals: literals.clone(),
            doc: def.doc.clone(),
        },
        SimpleVariety::Restriction(base) => {
            let target = map_primitive(base.as_deref());
            cx.mark_used(&target);
            Declaration::PrimitiveAlias {
                name,
                target,
                doc: def.doc.clone(),
            }
        }
        SimpleVariety::List(item) => {
            let item = map_primitive(item.as_deref());
            cx.mark_used(&item);
            Declaration::ArrayAlias {
                name,
                item,
                doc: def.doc.clone(),
            }
        }
    }
}
