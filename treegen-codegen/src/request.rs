//! Generation requests.
//!
//! A request is one unit of work: a base type name, its raw rules and the
//! directory to write to. Every rule is parsed and validated, and the whole
//! file rendered in memory, before anything touches the file system.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::output::GeneratedFile;
use std::path::{Path, PathBuf};
use treegen_schema::{Grammar, HierarchyDef, HierarchyIr, validate_grammar, validate_hierarchy};

/// One base type to generate and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Name of the abstract base type; also the output file stem.
    pub base_name: String,
    /// Raw rules, `"<VariantName> : <Type> <name>, ..."`, in output order.
    pub rules: Vec<String>,
    /// Destination directory.
    pub destination: PathBuf,
}

impl GenerationRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new<I, S>(
        base_name: impl Into<String>,
        rules: I,
        destination: impl Into<PathBuf>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_name: base_name.into(),
            rules: rules.into_iter().map(Into::into).collect(),
            destination: destination.into(),
        }
    }

    /// Parses and validates the rules of this request.
    ///
    /// # Errors
    /// Returns `CodegenError` for the first malformed rule or invalid name.
    pub fn parse(&self) -> Result<HierarchyDef, CodegenError> {
        let hierarchy = HierarchyDef::from_rules(&self.base_name, &self.rules)?;
        validate_hierarchy(&hierarchy)?;
        Ok(hierarchy)
    }

    /// Renders the request into an in-memory file.
    ///
    /// # Errors
    /// Returns `CodegenError` if parsing or validation fails.
    pub fn render(&self, config: &GeneratorConfig) -> Result<GeneratedFile, CodegenError> {
        let hierarchy = self.parse()?;
        Ok(render_hierarchy(&hierarchy, config))
    }
}

/// Parses, renders and writes a single request.
///
/// Nothing is written unless every rule parses and validates.
///
/// # Returns
/// Path of the written file.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or writing fails.
pub fn generate(
    request: &GenerationRequest,
    config: &GeneratorConfig,
) -> Result<PathBuf, CodegenError> {
    let file = request.render(config)?;
    file.write_to(&request.destination)
}

/// Renders every base type of a grammar with `config` as given.
///
/// Use [`GeneratorConfig::merged_with`] first to honour the package and
/// imports the grammar declares.
///
/// # Errors
/// Returns `CodegenError` if validation fails or the grammar is empty.
pub fn render_grammar(
    grammar: &Grammar,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    if grammar.hierarchies.is_empty() {
        return Err(CodegenError::generation("grammar declares no base types"));
    }
    validate_grammar(grammar)?;

    Ok(grammar
        .hierarchies
        .iter()
        .map(|h| render_hierarchy(h, config))
        .collect())
}

/// Renders and writes every base type of a grammar into `destination`.
///
/// All files are rendered before the first one is written.
///
/// # Returns
/// Paths of the written files, in grammar order.
///
/// # Errors
/// Returns `CodegenError` if validation or any write fails.
pub fn generate_grammar(
    grammar: &Grammar,
    destination: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, CodegenError> {
    let files = render_grammar(grammar, config)?;
    files.iter().map(|f| f.write_to(destination)).collect()
}

fn render_hierarchy(hierarchy: &HierarchyDef, config: &GeneratorConfig) -> GeneratedFile {
    let ir = HierarchyIr::from_hierarchy(hierarchy);
    let generator = Generator::new(&ir, config);
    tracing::debug!(
        "Rendering {} with {} variants",
        hierarchy.base_name,
        ir.variants.len()
    );
    GeneratedFile::new(generator.file_name(), generator.generate())
}
