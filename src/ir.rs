//! Declaration intermediate representation
//!
//! The abstract declaration graph handed to the renderer. Each module is
//! an ordered list of declaration nodes: type aliases (to a primitive, a
//! literal union, or an array), interfaces with members and optional
//! heritage, and import clauses. Every node may carry leading
//! documentation lines produced by the annotation formatter.
//!
//! The IR derives `Serialize` so the CLI can dump it as JSON for
//! inspection.

use serde::Serialize;

/// One interface member
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    /// Normalized field name (already camel-cased / quoted)
    pub name: String,
    /// Type reference: a primitive or a named type
    pub type_ref: String,
    /// Whether the member is an array (maxOccurs="unbounded")
    pub is_array: bool,
    /// Whether the member is optional
    pub optional: bool,
    /// Leading documentation lines
    pub doc: Option<Vec<String>>,
}

/// The open index-signature member modeling a schema extension point
#[derive(Debug, Clone, Serialize)]
pub struct OpenMember {
    /// Documentation carried by the wildcard, if any
    pub doc: Option<Vec<String>>,
}

/// An interface declaration with members and optional heritage
#[derive(Debug, Clone, Serialize)]
pub struct Interface {
    /// Interface name (cleaned)
    pub name: String,
    /// Base type the interface extends, if any
    pub extends: Option<String>,
    /// Ordered members
    pub members: Vec<Property>,
    /// Trailing index-signature member, present when the source type
    /// carried an unrestricted wildcard
    pub open: Option<OpenMember>,
    /// Leading documentation lines
    pub doc: Option<Vec<String>>,
}

/// One declaration node
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    /// `type Name = primitive;`
    PrimitiveAlias {
        /// Alias name
        name: String,
        /// Target primitive or named type
        target: String,
        /// Leading documentation lines
        doc: Option<Vec<String>>,
    },
    /// `type Name = "A" | "B";`
    UnionAlias {
        /// Alias name
        name: String,
        /// Ordered literal values
        literals: Vec<String>,
        /// Leading documentation lines
        doc: Option<Vec<String>>,
    },
    /// `type Name = Item[];`
    ArrayAlias {
        /// Alias name
        name: String,
        /// Item type reference
        item: String,
        /// Leading documentation lines
        doc: Option<Vec<String>>,
    },
    /// An interface with members and optional heritage
    Interface(Interface),
    /// `import { A, B } from "./module";`
    Import {
        /// Imported type names, in discovery order
        names: Vec<String>,
        /// Owning module name
        from: String,
    },
}

impl Declaration {
    /// The declared type name; imports declare nothing
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::PrimitiveAlias { name, .. }
            | Declaration::UnionAlias { name, .. }
            | Declaration::ArrayAlias { name, .. } => Some(name),
            Declaration::Interface(i) => Some(&i.name),
            Declaration::Import { .. } => None,
        }
    }
}

/// A generated declaration module
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Module name (file stem, possibly version-suffixed)
    pub name: String,
    /// Ordered declarations; imports are prepended by the resolver pass
    pub declarations: Vec<Declaration>,
}

impl Module {
    /// Create an empty module
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            declarations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_names() {
        let alias = Declaration::PrimitiveAlias {
            name: "AnyURI".into(),
            target: "string".into(),
            doc: None,
        };
        assert_eq!(alias.name(), Some("AnyURI"));

        let import = Declaration::Import {
            names: vec!["A".into()],
            from: "common".into(),
        };
        assert_eq!(import.name(), None);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let alias = Declaration::UnionAlias {
            name: "State".into(),
            literals: vec!["Idle".into(), "Active".into()],
            doc: None,
        };
        let json = serde_json::to_value(&alias).unwrap();
        assert_eq!(json["kind"], "unionAlias");
        assert_eq!(json["literals"][0], "Idle");
    }
}
