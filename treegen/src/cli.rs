//! Command-line front end: `treegen [OPTIONS] <OUTPUT_DIR>`.

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;
use treegen_codegen::{
    CodegenError, GeneratedFile, GenerationRequest, GeneratorConfig, render_grammar,
};
use treegen_schema::parse_grammar_file;

/// Rules of the Lox expression tree, used when no schema file is given.
pub const LOX_EXPR_RULES: [&str; 4] = [
    "Binary   : Expr left, Token operator, Expr right",
    "Grouping : Expr expression",
    "Literal  : Object value",
    "Unary    : Token operator, Expr right",
];

/// Generate an abstract base type with one nested type per grammar rule.
#[derive(Parser, Debug)]
#[command(name = "treegen", version)]
pub struct Cli {
    /// Output directory for the generated files (created if missing)
    pub output_dir: PathBuf,

    /// XML schema file describing one or more base types
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// package declared at the top of every generated file
    #[arg(
        long,
        conflicts_with = "no_package",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub package: Option<String>,

    /// omit the package declaration
    #[arg(long, default_value_t = false)]
    pub no_package: bool,

    /// import line to emit; repeat for several, replaces the defaults
    #[arg(
        long = "import",
        value_name = "TYPE",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub imports: Vec<String>,

    /// emit no import lines
    #[arg(long, default_value_t = false, conflicts_with = "imports")]
    pub no_imports: bool,

    /// output file extension, with or without the leading dot
    #[arg(long, value_parser = parse_extension)]
    pub extension: Option<String>,

    /// print the generated sources instead of writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the request for the built-in Lox expression grammar.
    #[must_use]
    pub fn default_request(&self) -> GenerationRequest {
        GenerationRequest::new("Expr", LOX_EXPR_RULES, &self.output_dir)
    }

    /// Applies command-line overrides on top of `config`.
    #[must_use]
    pub fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if self.no_package {
            config.package = None;
        } else if let Some(package) = &self.package {
            config.package = Some(package.clone());
        }

        if self.no_imports {
            config.imports.clear();
        } else if !self.imports.is_empty() {
            config.imports = self.imports.clone();
        }

        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }

        config
    }

    /// Parses the grammar and renders every file in memory.
    ///
    /// Settings are layered: defaults, then the schema file, then flags.
    ///
    /// # Errors
    /// Returns `CodegenError` if the schema cannot be read, parsed or validated.
    pub fn render(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        match &self.schema {
            Some(path) => {
                tracing::debug!("Loading schema {}", path.display());
                let grammar = parse_grammar_file(path)?;
                let config = self.apply_overrides(GeneratorConfig::default().merged_with(&grammar));
                render_grammar(&grammar, &config)
            }
            None => {
                let config = self.apply_overrides(GeneratorConfig::default());
                Ok(vec![self.default_request().render(&config)?])
            }
        }
    }

    /// Writes rendered files into the output directory.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` for the first file that cannot be written.
    pub fn write(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, CodegenError> {
        files.iter().map(|f| f.write_to(&self.output_dir)).collect()
    }
}

fn parse_extension(value: &str) -> Result<String, String> {
    let extension = value.trim().trim_start_matches('.');
    if extension.is_empty() {
        return Err("extension must not be empty".to_string());
    }
    Ok(extension.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("treegen").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_positional_output_dir() {
        let cli = parse(&["out/lox"]);
        assert_eq!(cli.output_dir, PathBuf::from("out/lox"));
        assert!(cli.schema.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_missing_output_dir_is_an_error() {
        assert!(Cli::try_parse_from(["treegen"]).is_err());
    }

    #[test]
    fn test_package_conflicts_with_no_package() {
        let result = Cli::try_parse_from(["treegen", "out", "--package", "a.b", "--no-package"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_values_are_rejected() {
        for args in [
            ["treegen", "out", "--package", ""],
            ["treegen", "out", "--import", ""],
            ["treegen", "out", "--extension", ""],
            ["treegen", "out", "--extension", "."],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "accepted {args:?}");
        }
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "out",
            "--package",
            "org.example",
            "--import",
            "java.util.List",
            "--import",
            "java.util.Map",
            "--extension",
            ".jav",
        ]);
        let config = cli.apply_overrides(GeneratorConfig::default());

        assert_eq!(config.package.as_deref(), Some("org.example"));
        assert_eq!(config.imports, vec!["java.util.List", "java.util.Map"]);
        assert_eq!(config.extension, "jav");

        let cli = parse(&["out", "--no-package", "--no-imports"]);
        let config = cli.apply_overrides(GeneratorConfig::default());
        assert!(config.package.is_none());
        assert!(config.imports.is_empty());
    }

    #[test]
    fn test_render_default_grammar() {
        let cli = parse(&["out"]);
        let files = cli.render().expect("Failed to render");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "Expr.java");
        for name in ["Binary", "Grouping", "Literal", "Unary"] {
            assert!(
                files[0]
                    .contents
                    .contains(&format!("\tstatic class {name} extends Expr {{\n"))
            );
        }
    }

    #[test]
    fn test_render_and_write_schema() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = dir.path().join("ast.xml");
        std::fs::write(
            &schema,
            r#"<treeSchema package="from.schema">
    <base name="Expr"><rule>Literal : Object value</rule></base>
    <base name="Stmt"><rule>Print : Expr expression</rule></base>
</treeSchema>"#,
        )
        .expect("Failed to write schema");

        let out = dir.path().join("gen");
        let schema_arg = schema.to_string_lossy().into_owned();
        let out_arg = out.to_string_lossy().into_owned();
        let cli = parse(&[&out_arg, "--schema", &schema_arg, "--package", "from.flag"]);

        let files = cli.render().expect("Failed to render");
        assert!(files[0].contents.starts_with("package from.flag;\n"));

        let paths = cli.write(&files).expect("Failed to write");
        assert_eq!(paths, vec![out.join("Expr.java"), out.join("Stmt.java")]);
    }

    #[test]
    fn test_render_bad_schema_reports_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = dir.path().join("bad.xml");
        std::fs::write(
            &schema,
            r#"<treeSchema><base name="Expr"><rule>Bad</rule></base></treeSchema>"#,
        )
        .expect("Failed to write schema");

        let schema_arg = schema.to_string_lossy().into_owned();
        let cli = parse(&["out", "--schema", &schema_arg]);
        assert!(matches!(cli.render(), Err(CodegenError::Parse(_))));
    }
}
