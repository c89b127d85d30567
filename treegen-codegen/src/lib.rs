//! # TreeGen Codegen
//!
//! Source generation for node hierarchies.
//!
//! This crate provides:
//! - An abstract base type with one nested variant type per grammar rule
//! - Constructors assigning every field once, plus assign-once field lists
//! - Configurable package, imports, indentation and file extension
//! - Writing generated files into a destination directory

pub mod config;
pub mod error;
pub mod generator;
pub mod java;
pub mod output;
pub mod request;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use output::{GeneratedFile, write_file};
pub use request::{GenerationRequest, generate, generate_grammar, render_grammar};

use treegen_schema::{HierarchyDef, HierarchyIr, validate_hierarchy};

/// Generates source text for one base type from raw rules.
///
/// # Arguments
/// * `base_name` - Name of the abstract base type
/// * `rules` - Rules of the form `"Binary : Expr left, Token operator, Expr right"`
/// * `config` - Generator settings
///
/// # Returns
/// Generated source text.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_rules<I, S>(
    base_name: &str,
    rules: I,
    config: &GeneratorConfig,
) -> Result<String, CodegenError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let hierarchy = HierarchyDef::from_rules(base_name, rules)?;
    validate_hierarchy(&hierarchy)?;
    let ir = HierarchyIr::from_hierarchy(&hierarchy);
    Ok(Generator::new(&ir, config).generate())
}

/// Generates one file per base type from a schema string.
///
/// The package and imports declared by the schema take precedence over `config`.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_xml(
    xml: &str,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let grammar = treegen_schema::parse_grammar(xml)?;
    let config = config.clone().merged_with(&grammar);
    render_grammar(&grammar, &config)
}

/// Generates one file per base type from a schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, config)
}
