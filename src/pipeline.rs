//! Run orchestration
//!
//! The two-pass pipeline over a source directory. Cross-file references
//! cannot be resolved until every module's declared-type set is
//! complete, so:
//!
//! 1. The shared primitives module is generated and its names seed the
//!    registry.
//! 2. Every schema document, then every service description (fixed kind
//!    order; sorted discovery order within a kind), is ingested and
//!    generated, mutating the registry sequentially.
//! 3. The import resolver runs over every module, and only then is each
//!    module rendered and written.
//!
//! Processing is strictly sequential; the registry is plain mutable
//! state threaded by reference and later documents must observe earlier
//! registrations.

use crate::error::{Error, Result};
use crate::generator::{generate_document, generate_primitives, GeneratedModule};
use crate::ir::Module;
use crate::registry::{resolve_imports, TypeRegistry};
use crate::render::render_module;
use crate::schema::{DocumentKind, SchemaDocument};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Recursively collect source files under a directory, sorted by path at
/// each level for a deterministic discovery order.
fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out)?;
        } else if DocumentKind::from_path(&path).is_some() {
            out.push(path);
        }
    }
    Ok(())
}

/// Discover source documents: schemas first, then service descriptions
pub fn discover(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Err(Error::InvalidInput(format!(
            "source path is not a directory: {}",
            source.display()
        )));
    }
    let mut files = Vec::new();
    walk(source, &mut files)?;

    let (schemas, services): (Vec<_>, Vec<_>) = files
        .into_iter()
        .partition(|p| DocumentKind::from_path(p) == Some(DocumentKind::Schema));
    Ok(schemas.into_iter().chain(services).collect())
}

/// Compile a source directory into finished declaration modules, imports
/// already resolved and prepended.
pub fn compile(source: &Path) -> Result<Vec<Module>> {
    let files = discover(source)?;
    info!(files = files.len(), source = %source.display(), "compiling corpus");

    let mut registry = TypeRegistry::new();
    let mut generated: Vec<GeneratedModule> = vec![generate_primitives(&mut registry)];

    for path in &files {
        let doc = SchemaDocument::load(path)?;
        generated.push(generate_document(&doc, &mut registry)?);
    }

    for generated_module in &mut generated {
        resolve_imports(&mut generated_module.module, &generated_module.cx, &registry);
    }
    Ok(generated.into_iter().map(|g| g.module).collect())
}

/// Compile a source directory and write one `.d.ts` file per module into
/// the output directory, creating it if absent. Returns the written
/// paths.
pub fn run(source: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let modules = compile(source)?;
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for module in &modules {
        let path = out_dir.join(format!("{}.d.ts", module.name));
        fs::write(&path, render_module(module))?;
        debug!(path = %path.display(), "wrote module");
        written.push(path);
    }
    info!(modules = written.len(), out = %out_dir.display(), "run complete");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_non_directory_source_rejected() {
        let err = discover(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_discovery_orders_schemas_before_services() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.wsdl"), "<definitions/>").unwrap();
        fs::write(dir.path().join("z.xsd"), "<schema/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = discover(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["z.xsd", "a.wsdl"]);
    }

    #[test]
    fn test_compile_always_yields_primitives_module_first() {
        let dir = tempfile::tempdir().unwrap();
        let modules = compile(dir.path()).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "xsd");
        assert_eq!(modules[0].declarations.len(), 3);
    }
}
