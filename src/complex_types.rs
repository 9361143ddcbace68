//! Complex type flattening and member building
//!
//! A `complexType` becomes an interface declaration. Extension content
//! (`complexContent/extension`) is spliced into the type's own content
//! before members are built, and the base appears as heritage in the
//! declaration; the base's members are never re-listed. A type that
//! extends itself is a degenerate definition and is discarded with a
//! warning. A type carrying both an extension and its own explicit
//! sequence violates the corpus contract and aborts the run.
//!
//! Nested anonymous complex types inside sequence elements are promoted
//! recursively into new top-level interfaces named after the enclosing
//! element. An unrestricted wildcard in a sequence becomes one trailing
//! open index-signature member.

use crate::annotations::doc_lines;
use crate::error::{Error, Result};
use crate::ir::{Declaration, Interface, OpenMember, Property};
use crate::names::{camel_case, clean_name, local_name};
use crate::primitives::map_primitive;
use crate::registry::ModuleCx;
use crate::tree::Node;
use tracing::warn;

/// A flattened complex type, ready for member building
#[derive(Debug)]
pub struct ComplexTypeDef {
    /// Cleaned type name
    pub name: String,
    /// Cleaned base type name (from a complexContent extension)
    pub base: Option<String>,
    /// Sequence content nodes (`element` and `any`), in order
    pub content: Vec<Node>,
    /// Attribute nodes (`attribute` and `attributeGroup` references)
    pub attributes: Vec<Node>,
    /// Cleaned documentation lines
    pub doc: Option<Vec<String>>,
}

/// Flatten a `complexType` node.
///
/// Returns `Ok(None)` for a self-extending definition (skipped with a
/// warning) and an error when the node declares both an extension and
/// an explicit own sequence.
pub fn flatten(node: &Node, name: &str) -> Result<Option<ComplexTypeDef>> {
    let name = clean_name(name);
    let own_sequence = node.first_child("sequence");
    let extension = node
        .first_child("complexContent")
        .and_then(|cc| cc.first_child("extension"));

    let mut base = None;
    let mut content_root = own_sequence;
    let mut attributes: Vec<Node> = node
        .children
        .iter()
        .filter(|c| c.tag == "attribute" || c.tag == "attributeGroup")
        .cloned()
        .collect();

    if let Some(ext) = extension {
        if own_sequence.is_some() {
            return Err(Error::structural(
                &name,
                "declares both a complexContent extension and an explicit sequence",
            ));
        }
        let base_name = ext.attr("base").map(|b| clean_name(local_name(b)));
        if base_name.as_deref() == Some(name.as_str()) {
            warn!(type_name = name.as_str(), "self-extending complex type skipped");
            return Ok(None);
        }
        base = base_name;
        // Splice the extension-carried sequence and attributes into the
        // derived type's own content.
        content_root = ext.first_child("sequence");
        attributes.extend(
            ext.children
                .iter()
                .filter(|c| c.tag == "attribute" || c.tag == "attributeGroup")
                .cloned(),
        );
    }

    let content = content_root
        .map(|seq| {
            seq.children
                .iter()
                .filter(|c| c.tag == "element" || c.tag == "any")
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    Ok(Some(ComplexTypeDef {
        name,
        base,
        content,
        attributes,
        doc: doc_lines(node),
    }))
}

/// Decide whether a member is optional, per the cardinality precedence:
/// `use="optional"` wins unconditionally; otherwise `use="required"`,
/// `minOccurs="1"`, or the complete absence of both occurrence bounds
/// means required; every other combination is optional.
pub fn optionality(use_attr: Option<&str>, min: Option<&str>, max: Option<&str>) -> bool {
    if use_attr == Some("optional") {
        return true;
    }
    let required =
        use_attr == Some("required") || min == Some("1") || (min.is_none() && max.is_none());
    !required
}

/// Member field name: explicit `name`, or derived from a `ref` by
/// stripping its namespace-prefix segment.
fn member_name(node: &Node) -> Option<String> {
    node.attr("name")
        .map(|n| n.to_string())
        .or_else(|| node.attr("ref").map(|r| local_name(r).to_string()))
}

/// Compile a complex type into declarations: any recursively promoted
/// nested types first, then the interface itself. Returns an empty list
/// when the definition is a skipped self-extension.
pub fn compile(node: &Node, name: &str, cx: &mut ModuleCx) -> Result<Vec<Declaration>> {
    let def = match flatten(node, name)? {
        Some(def) => def,
        None => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    let mut members = Vec::new();
    let mut open: Option<OpenMember> = None;

    if let Some(base) = &def.base {
        cx.mark_used(base);
    }

    for child in &def.content {
        if child.tag == "any" {
            if open.is_none() {
                open = Some(OpenMember { doc: doc_lines(child) });
            }
            continue;
        }

        let raw_name = match member_name(child) {
            Some(n) => n,
            None => continue,
        };
        let optional = optionality(
            child.attr("use"),
            child.attr("minOccurs"),
            child.attr("maxOccurs"),
        );
        let is_array = child.attr("maxOccurs") == Some("unbounded");

        let type_ref = match child.attr("type") {
            Some(ty) => map_primitive(Some(ty)),
            None => {
                if let Some(inline) = child.first_child("complexType") {
                    // Promote the anonymous type, named after the element.
                    let promoted_name = clean_name(&raw_name);
                    out.extend(compile(inline, &promoted_name, cx)?);
                    promoted_name
                } else if let Some(simple) = child.first_child("simpleType") {
                    let base = simple.first_child("restriction").and_then(|r| r.attr("base"));
                    map_primitive(base)
                } else {
                    map_primitive(None)
                }
            }
        };
        cx.mark_used(&type_ref);

        members.push(Property {
            name: camel_case(&raw_name),
            type_ref,
            is_array,
            optional,
            doc: doc_lines(child),
        });
    }

    for attr in &def.attributes {
        let raw_name = match member_name(attr) {
            Some(n) => n,
            None => continue,
        };
        let type_ref = map_primitive(attr.attr("type"));
        cx.mark_used(&type_ref);
        members.push(Property {
            name: camel_case(&raw_name),
            type_ref,
            is_array: false,
            // Attributes are optional unless explicitly marked required.
            optional: attr.attr("use") != Some("required"),
            doc: doc_lines(attr),
        });
    }

    out.push(Declaration::Interface(Interface {
        name: def.name,
        extends: def.base,
        members,
        open,
        doc: def.doc,
    }));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compile_one(xml: &str, name: &str) -> (Vec<Declaration>, ModuleCx) {
        let node = Node::parse(xml).unwrap();
        let mut cx = ModuleCx::new("m");
        let decls = compile(&node, name, &mut cx).unwrap();
        (decls, cx)
    }

    fn as_interface(decl: &Declaration) -> &Interface {
        match decl {
            Declaration::Interface(i) => i,
            other => panic!("expected interface, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_inherits_without_relisting_base_members() {
        let (decls, cx) = compile_one(
            r#"<complexType name="PTZNode">
                 <complexContent>
                   <extension base="tt:DeviceEntity">
                     <sequence>
                       <element name="Name" type="xs:string"/>
                     </sequence>
                   </extension>
                 </complexContent>
               </complexType>"#,
            "PTZNode",
        );
        assert_eq!(decls.len(), 1);
        let iface = as_interface(&decls[0]);
        assert_eq!(iface.extends.as_deref(), Some("DeviceEntity"));
        // Only the extension's own member, never the base's
        assert_eq!(iface.members.len(), 1);
        assert_eq!(iface.members[0].name, "Name");
        assert!(cx.used.contains("DeviceEntity"));
    }

    #[test]
    fn test_self_extension_skipped_without_error() {
        let (decls, _) = compile_one(
            r#"<complexType name="Config">
                 <complexContent>
                   <extension base="tt:Config"/>
                 </complexContent>
               </complexType>"#,
            "Config",
        );
        assert!(decls.is_empty());
    }

    #[test]
    fn test_extension_plus_own_sequence_is_fatal() {
        let node = Node::parse(
            r#"<complexType name="Broken">
                 <sequence><element name="A" type="xs:string"/></sequence>
                 <complexContent><extension base="tt:Base"/></complexContent>
               </complexType>"#,
        )
        .unwrap();
        let mut cx = ModuleCx::new("m");
        let err = compile(&node, "Broken", &mut cx).unwrap_err();
        assert!(matches!(err, Error::StructuralViolation { .. }));
    }

    #[test]
    fn test_optionality_precedence_exhaustive() {
        let uses = [Some("required"), Some("optional"), None];
        let mins = [Some("1"), Some("0"), None];
        let maxs = [Some("unbounded"), Some("2"), None];
        for u in uses {
            for m in mins {
                for x in maxs {
                    let expected_optional = if u == Some("optional") {
                        true
                    } else {
                        !(u == Some("required")
                            || m == Some("1")
                            || (m.is_none() && x.is_none()))
                    };
                    assert_eq!(
                        optionality(u, m, x),
                        expected_optional,
                        "use={u:?} minOccurs={m:?} maxOccurs={x:?}"
                    );
                }
            }
        }
        // Spot checks pinning the interesting corners
        assert!(!optionality(None, None, None)); // bare member is required
        assert!(optionality(None, Some("0"), None));
        assert!(!optionality(Some("required"), Some("0"), None)); // use wins
        assert!(optionality(Some("optional"), Some("1"), None)); // optional wins over minOccurs
        assert!(optionality(None, None, Some("unbounded")));
    }

    #[test]
    fn test_unbounded_is_array_regardless_of_optionality() {
        let (decls, _) = compile_one(
            r#"<complexType name="List">
                 <sequence>
                   <element name="Items" type="tt:Item" minOccurs="1" maxOccurs="unbounded"/>
                 </sequence>
               </complexType>"#,
            "List",
        );
        let iface = as_interface(&decls[0]);
        assert!(iface.members[0].is_array);
        assert!(!iface.members[0].optional);
    }

    #[test]
    fn test_required_attribute_and_repeatable_element() {
        let (decls, _) = compile_one(
            r#"<complexType name="Scope">
                 <sequence>
                   <element name="Items" type="xs:string" maxOccurs="unbounded"/>
                 </sequence>
                 <attribute name="token" type="xs:string" use="required"/>
               </complexType>"#,
            "Scope",
        );
        let iface = as_interface(&decls[0]);
        let items = &iface.members[0];
        assert!(items.is_array);
        assert!(items.optional); // maxOccurs present without minOccurs="1"
        let token = &iface.members[1];
        assert_eq!(token.type_ref, "string");
        assert!(!token.optional);
        assert!(!token.is_array);
    }

    #[test]
    fn test_unmarked_attribute_is_optional() {
        let (decls, _) = compile_one(
            r#"<complexType name="Scope">
                 <attribute name="token" type="xs:string"/>
               </complexType>"#,
            "Scope",
        );
        let iface = as_interface(&decls[0]);
        assert!(iface.members[0].optional);
    }

    #[test]
    fn test_wildcard_only_type_declares_open_interface() {
        let (decls, _) = compile_one(
            r###"<complexType name="Extension">
                 <sequence>
                   <any namespace="##any" processContents="lax"/>
                 </sequence>
               </complexType>"###,
            "Extension",
        );
        let iface = as_interface(&decls[0]);
        assert!(iface.members.is_empty());
        assert!(iface.open.is_some());
    }

    #[test]
    fn test_wildcard_carries_documentation() {
        let (decls, _) = compile_one(
            r#"<complexType name="Extension">
                 <sequence>
                   <any>
                     <annotation><documentation>Vendor content.</documentation></annotation>
                   </any>
                 </sequence>
               </complexType>"#,
            "Extension",
        );
        let iface = as_interface(&decls[0]);
        let open = iface.open.as_ref().unwrap();
        assert_eq!(open.doc, Some(vec!["Vendor content.".to_string()]));
    }

    #[test]
    fn test_nested_anonymous_type_promoted() {
        let (decls, cx) = compile_one(
            r#"<complexType name="Capabilities">
                 <sequence>
                   <element name="Network" minOccurs="0">
                     <complexType>
                       <sequence>
                         <element name="IPFilter" type="xs:boolean" minOccurs="0"/>
                       </sequence>
                     </complexType>
                   </element>
                 </sequence>
               </complexType>"#,
            "Capabilities",
        );
        // Promoted interface first, enclosing interface last
        assert_eq!(decls.len(), 2);
        let network = as_interface(&decls[0]);
        assert_eq!(network.name, "Network");
        // Acronym-style leading pair gets the camel-case heuristic
        assert_eq!(network.members[0].name, "iPFilter");
        let caps = as_interface(&decls[1]);
        assert_eq!(caps.name, "Capabilities");
        assert_eq!(caps.members[0].type_ref, "Network");
        assert!(caps.members[0].optional);
        assert!(cx.used.contains("Network"));
    }

    #[test]
    fn test_ref_member_name_derived_from_local_part() {
        let (decls, _) = compile_one(
            r#"<complexType name="Holder">
                 <sequence>
                   <element ref="tt:Documentation" minOccurs="0"/>
                 </sequence>
               </complexType>"#,
            "Holder",
        );
        let iface = as_interface(&decls[0]);
        assert_eq!(iface.members[0].name, "Documentation");
        assert!(iface.members[0].optional);
    }

    #[test]
    fn test_missing_type_falls_back_to_unknown() {
        let (decls, _) = compile_one(
            r#"<complexType name="Holder">
                 <sequence><element name="Payload" minOccurs="0"/></sequence>
               </complexType>"#,
            "Holder",
        );
        let iface = as_interface(&decls[0]);
        assert_eq!(iface.members[0].type_ref, "any");
    }
}
