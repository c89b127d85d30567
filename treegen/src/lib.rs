//! # TreeGen
//!
//! Source generator for tagged-union-like node hierarchies.
//!
//! TreeGen reads a compact grammar, one rule per variant, and emits an
//! abstract base type with one nested concrete type per rule. Every field
//! is assigned once by the constructor and never reassigned.
//!
//! ## Quick Start
//!
//! ```ignore
//! use treegen::prelude::*;
//!
//! let request = GenerationRequest::new(
//!     "Expr",
//!     ["Binary : Expr left, Token operator, Expr right", "Literal : Object value"],
//!     "src/main/java/lox",
//! );
//! generate(&request, &GeneratorConfig::default())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Rule parsing, schema files and validation
//! - [`codegen`] - Source generation and output
//! - [`cli`] - Command-line front end

pub mod cli;
pub mod prelude;

/// Rule parsing, schema files and validation.
pub mod schema {
    pub use treegen_schema::*;
}

/// Source generation from grammars.
pub mod codegen {
    pub use treegen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use treegen_codegen::{
    CodegenError, GeneratedFile, GenerationRequest, GeneratorConfig, generate, generate_grammar,
};
pub use treegen_schema::{Grammar, HierarchyDef, ParseError, SchemaError, parse_rule};
