//! Type registry and import resolution
//!
//! The [`TypeRegistry`] is threaded through the whole run: each declared
//! type name maps to the module that first declared it, and that mapping
//! never changes. After every module has been generated, the resolver
//! pass turns each module's "used but not locally declared" names into
//! import clauses, grouped per owning module in discovery order.

use crate::ir::{Declaration, Module};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

/// Process-wide map from type name to owning module. Write-once per key.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    owners: IndexMap<String, String>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// Register a declaration. The first module to register a name is
    /// its permanent canonical owner; a later attempt is a conflict and
    /// returns `false` without changing ownership.
    pub fn register(&mut self, name: &str, module: &str) -> bool {
        if let Some(owner) = self.owners.get(name) {
            warn!(
                type_name = name,
                owner = owner.as_str(),
                module,
                "duplicate declaration dropped; name already owned"
            );
            return false;
        }
        self.owners.insert(name.to_string(), module.to_string());
        true
    }

    /// Owning module of a type name, if registered
    pub fn owner(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(|s| s.as_str())
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Per-module declared/used-type bookkeeping, alive for the duration of
/// that module's compilation and read once by the resolver pass.
#[derive(Debug)]
pub struct ModuleCx {
    /// Module name
    pub module: String,
    /// Names this module declares
    pub declared: IndexSet<String>,
    /// Named (capitalized) types this module references
    pub used: IndexSet<String>,
}

/// Named types built into the target language; never imported
const TARGET_BUILTINS: &[&str] = &["Date"];

impl ModuleCx {
    /// Create bookkeeping for a module
    pub fn new(module: impl Into<String>) -> Self {
        ModuleCx {
            module: module.into(),
            declared: IndexSet::new(),
            used: IndexSet::new(),
        }
    }

    /// Record a type reference. Primitives (lower-case) and target
    /// built-ins are not named corpus types and are ignored.
    pub fn mark_used(&mut self, type_ref: &str) {
        let named = type_ref.chars().next().is_some_and(|c| c.is_uppercase());
        if named && !TARGET_BUILTINS.contains(&type_ref) {
            self.used.insert(type_ref.to_string());
        }
    }
}

/// Compute a module's imports and prepend them to its declarations.
///
/// `ImportsNeeded = UsedTypes − DeclaredTypes`; each needed name is
/// looked up in the registry and grouped by owning module. Names the
/// registry does not know are warned about and omitted.
pub fn resolve_imports(module: &mut Module, cx: &ModuleCx, registry: &TypeRegistry) {
    let mut by_owner: IndexMap<String, Vec<String>> = IndexMap::new();
    for name in cx.used.difference(&cx.declared) {
        match registry.owner(name) {
            Some(owner) if owner != cx.module => {
                by_owner.entry(owner.to_string()).or_default().push(name.clone());
            }
            Some(_) => {}
            None => {
                warn!(
                    type_name = name.as_str(),
                    module = cx.module.as_str(),
                    "used type not found in registry; import omitted"
                );
            }
        }
    }

    if by_owner.is_empty() {
        return;
    }
    debug!(module = cx.module.as_str(), imports = by_owner.len(), "resolved imports");

    let imports: Vec<Declaration> = by_owner
        .into_iter()
        .map(|(from, names)| Declaration::Import { names, from })
        .collect();
    module.declarations.splice(0..0, imports);
}
