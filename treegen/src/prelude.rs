//! Prelude module for convenient imports.
//!
//! ```ignore
//! use treegen::prelude::*;
//! ```

// Schema types
pub use treegen_schema::{
    FieldDef, Grammar, HierarchyDef, HierarchyIr, ParseError, SchemaError, VariantDef,
    parse_grammar, parse_grammar_file, parse_rule,
};

// Generation
pub use treegen_codegen::{
    CodegenError, GeneratedFile, GenerationRequest, Generator, GeneratorConfig, generate,
    generate_from_rules, generate_from_xml, generate_grammar, render_grammar,
};
