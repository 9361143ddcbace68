//! Primitive type mapping
//!
//! This module maps qualified XSD primitive names onto TypeScript types,
//! and owns the shared primitives module (`xsd`) whose named aliases
//! (`AnyURI`, `PositiveInteger`, `Time`) every generated module may
//! import.
//!
//! Mapping precedence:
//! 1. XSD built-ins (by local name, for the `xs:`/`xsd:` prefixes).
//! 2. Known opaque extension types from service namespaces that carry no
//!    structural definition in the corpus: collapsed to `any`.
//! 3. Everything else: the local name becomes a forward reference to a
//!    type expected to be declared somewhere in the corpus.
//! 4. No type at all: `any`.

use crate::ir::Declaration;
use crate::names::{clean_name, split_qname};

/// The universal unknown type
pub const UNKNOWN_TYPE: &str = "any";

/// Name of the shared primitives module
pub const PRIMITIVES_MODULE: &str = "xsd";

/// Map an XSD built-in local name to its TypeScript type, if it is one
fn builtin(local: &str) -> Option<&'static str> {
    let ty = match local {
        "double" | "float" | "int" | "integer" | "short" | "signedInt" | "unsignedInt"
        | "unsignedShort" | "nonNegativeInteger" => "number",
        "dateTime" => "Date",
        "string" | "token" | "normalizedString" => "string",
        "boolean" => "boolean",
        "anyURI" => "AnyURI",
        "positiveInteger" => "PositiveInteger",
        "time" => "Time",
        "hexBinary" | "base64Binary" | "anyType" | "anySimpleType" | "QName" => UNKNOWN_TYPE,
        _ => return None,
    };
    Some(ty)
}

/// Qualified extension types with no structural definition in scope.
/// These appear in service descriptions as opaque payloads.
const OPAQUE_TYPES: &[&str] = &[
    "wsnt:TopicExpressionType",
    "wsnt:QueryExpressionType",
    "wsnt:FilterType",
    "wsnt:NotificationMessageHolderType",
    "soapenv:Envelope",
    "soapenv:Fault",
    "xop:Include",
];

/// Map a qualified schema type name to a TypeScript type reference.
///
/// `None` (no type attribute at all) maps to the universal unknown type.
pub fn map_primitive(qname: Option<&str>) -> String {
    let qname = match qname {
        Some(q) if !q.is_empty() => q,
        _ => return UNKNOWN_TYPE.to_string(),
    };

    let (prefix, local) = split_qname(qname);
    if matches!(prefix, Some("xs") | Some("xsd") | None) {
        if let Some(ty) = builtin(local) {
            return ty.to_string();
        }
    }
    if OPAQUE_TYPES.contains(&qname) {
        return UNKNOWN_TYPE.to_string();
    }

    // Forward reference to a type declared elsewhere in the corpus.
    clean_name(local)
}

/// Declarations for the shared primitives module, generated first so the
/// registry owns their names before any document is compiled.
pub fn declarations() -> Vec<Declaration> {
    vec![
        Declaration::PrimitiveAlias {
            name: "AnyURI".to_string(),
            target: "string".to_string(),
            doc: None,
        },
        Declaration::PrimitiveAlias {
            name: "PositiveInteger".to_string(),
            target: "number".to_string(),
            doc: None,
        },
        Declaration::PrimitiveAlias {
            name: "Time".to_string(),
            target: "string".to_string(),
            doc: None,
        },
    ]
}
