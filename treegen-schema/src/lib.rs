//! # TreeGen Schema
//!
//! Grammar rule parser and schema definitions.
//!
//! This crate provides:
//! - Rule parsing (`"Binary : Expr left, Token operator, Expr right"`)
//! - XML schema files holding one or more base types
//! - Grammar validation
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;
pub mod variants;

pub use error::{ParseError, SchemaError};
pub use ir::HierarchyIr;
pub use parser::{parse_grammar, parse_grammar_file};
pub use types::Grammar;
pub use validation::{validate_grammar, validate_hierarchy};
pub use variants::{FieldDef, HierarchyDef, VariantDef, parse_field, parse_rule};
