//! Name normalization utilities
//!
//! This module turns schema identifiers into valid TypeScript names:
//! stripping characters TypeScript identifiers cannot carry, avoiding a
//! collision with the built-in `Object` type, and camel-casing field
//! names without mangling acronym-style names.

/// Replacement name for schema types literally called `Object`, which
/// would otherwise shadow the TypeScript built-in.
pub const OBJECT_ALIAS: &str = "AnyObject";

/// Clean a type name for use as a TypeScript identifier.
///
/// Strips hyphens and periods; renames the literal `Object` to
/// [`OBJECT_ALIAS`]. Idempotent on already-clean names.
pub fn clean_name(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| *c != '-' && *c != '.').collect();
    if cleaned == "Object" {
        OBJECT_ALIAS.to_string()
    } else {
        cleaned
    }
}

/// Camel-case a field name for use as an interface member.
///
/// The leading character is lower-cased unless the second character is
/// already lower-case, which keeps acronym-style names intact. A name
/// containing hyphens or periods cannot be a bare member name and is
/// wrapped in literal-key quotes instead.
pub fn camel_case(name: &str) -> String {
    if name.contains('-') || name.contains('.') {
        return format!("\"{}\"", name);
    }
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    match chars.next() {
        Some(second) if second.is_lowercase() => name.to_string(),
        _ => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_lowercase());
            out.push_str(&name[first.len_utf8()..]);
            out
        }
    }
}

/// Split a qualified name into prefix and local name
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    if let Some((prefix, local)) = qname.split_once(':') {
        (Some(prefix), local)
    } else {
        (None, qname)
    }
}

/// Local part of a qualified name (the name with its prefix stripped)
pub fn local_name(qname: &str) -> &str {
    split_qname(qname).1
}
