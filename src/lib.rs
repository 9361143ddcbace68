//! # xsd2ts
//!
//! A schema compiler that translates a corpus of XML Schema (XSD) and
//! service-description (WSDL) documents into TypeScript declaration
//! modules, resolving type references within and across source files.
//!
//! ## Pipeline
//!
//! One declaration module is produced per input document, plus a shared
//! primitives module. Generation is two-pass: every document is compiled
//! first, populating a process-wide type registry, and only then are
//! per-module import clauses computed from each module's used-but-not-
//! declared type names.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! // Compile a schema corpus and write .d.ts modules
//! let written = xsd2ts::pipeline::run(Path::new("wsdl"), Path::new("out"))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod tree;

// Pure utilities
pub mod annotations;
pub mod names;
pub mod primitives;

// Declaration IR and document model
pub mod ir;
pub mod schema;

// Translators
pub mod complex_types;
pub mod simple_types;

// Cross-module resolution and orchestration
pub mod generator;
pub mod pipeline;
pub mod registry;
pub mod render;

// Re-exports for convenience
pub use error::{Error, Result};

/// Version of the xsd2ts library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD 1.0 namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// WSDL 1.1 namespace
pub const WSDL_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/";
