//! Per-document declaration generation
//!
//! Turns one [`SchemaDocument`] into a declaration module, updating the
//! shared type registry and the module's declared/used-type sets as it
//! goes. Every emitted declaration name is unique within its module and
//! registered process-wide; a name already owned elsewhere is dropped
//! with a warning and later resolves to an import instead.

use crate::annotations::doc_lines;
use crate::complex_types;
use crate::error::Result;
use crate::ir::{Declaration, Interface, Module};
use crate::names::clean_name;
use crate::primitives::{self, map_primitive, PRIMITIVES_MODULE};
use crate::registry::{ModuleCx, TypeRegistry};
use crate::schema::SchemaDocument;
use crate::simple_types::{self, SimpleTypeDef};
use crate::tree::Node;
use tracing::{debug, warn};

/// A generated module together with its resolver-pass bookkeeping
#[derive(Debug)]
pub struct GeneratedModule {
    /// The declaration module
    pub module: Module,
    /// Declared/used sets, consumed by the import resolver
    pub cx: ModuleCx,
}

fn push(module: &mut Module, cx: &mut ModuleCx, registry: &mut TypeRegistry, decl: Declaration) {
    if let Some(name) = decl.name() {
        if cx.declared.contains(name) {
            warn!(
                type_name = name,
                module = cx.module.as_str(),
                "duplicate declaration within module dropped"
            );
            return;
        }
        if !registry.register(name, &cx.module) {
            // Conflict already warned by the registry; the reference will
            // resolve to an import from the canonical owner.
            return;
        }
        cx.declared.insert(name.to_string());
    }
    module.declarations.push(decl);
}

/// Generate the shared primitives module and seed the registry with its
/// names. Runs before any document is compiled.
pub fn generate_primitives(registry: &mut TypeRegistry) -> GeneratedModule {
    let mut module = Module::new(PRIMITIVES_MODULE);
    let mut cx = ModuleCx::new(PRIMITIVES_MODULE);
    for decl in primitives::declarations() {
        push(&mut module, &mut cx, registry, decl);
    }
    GeneratedModule { module, cx }
}

/// Generate one document's declaration module
pub fn generate_document(
    doc: &SchemaDocument,
    registry: &mut TypeRegistry,
) -> Result<GeneratedModule> {
    debug!(module = doc.module.as_str(), path = %doc.path.display(), "generating module");
    let mut module = Module::new(&doc.module);
    let mut cx = ModuleCx::new(&doc.module);

    for node in &doc.simple_types {
        if let Some(def) = SimpleTypeDef::from_node(node) {
            let decl = simple_types::translate(&def, &mut cx);
            push(&mut module, &mut cx, registry, decl);
        }
    }

    for node in &doc.complex_types {
        let name = match node.attr("name") {
            Some(n) => n,
            None => continue,
        };
        for decl in complex_types::compile(node, name, &mut cx)? {
            push(&mut module, &mut cx, registry, decl);
        }
    }

    for node in &doc.elements {
        for decl in compile_element(node, &mut cx)? {
            push(&mut module, &mut cx, registry, decl);
        }
    }

    Ok(GeneratedModule { module, cx })
}

/// Compile a top-level element through its three lifecycles: an inline
/// anonymous complex type is promoted into an interface named after the
/// element; a plain type reference becomes an empty declaration
/// inheriting from that type; an element with neither produces nothing.
fn compile_element(node: &Node, cx: &mut ModuleCx) -> Result<Vec<Declaration>> {
    let name = match node.attr("name") {
        Some(n) => n,
        None => return Ok(Vec::new()),
    };

    if let Some(inline) = node.first_child("complexType") {
        return complex_types::compile(inline, name, cx);
    }

    if let Some(ty) = node.attr("type") {
        let clean = clean_name(name);
        let target = map_primitive(Some(ty));
        if target == clean {
            // Degenerate alias-to-self, same suppression as self-extension.
            warn!(type_name = clean.as_str(), "element aliasing its own type name skipped");
            return Ok(Vec::new());
        }
        cx.mark_used(&target);
        let decl = if target.chars().next().is_some_and(|c| c.is_lowercase()) {
            // A primitive cannot appear in a heritage clause; alias it.
            Declaration::PrimitiveAlias {
                name: clean,
                target,
                doc: doc_lines(node),
            }
        } else {
            Declaration::Interface(Interface {
                name: clean,
                extends: Some(target),
                members: Vec::new(),
                open: None,
                doc: doc_lines(node),
            })
        };
        return Ok(vec![decl]);
    }

    Ok(Vec::new())
}
