//! Generator configuration.

use treegen_schema::Grammar;

/// Default package of the generated sources.
pub const DEFAULT_PACKAGE: &str = "comp.craftinginterpreters.lox";

/// Default import; field types may reference the generic list type.
pub const DEFAULT_IMPORT: &str = "java.util.List";

/// Settings controlling the surface of the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package declaration, omitted when `None`.
    pub package: Option<String>,
    /// Import lines, in order.
    pub imports: Vec<String>,
    /// One level of indentation.
    pub indent: String,
    /// Output file extension, without the dot.
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: Some(DEFAULT_PACKAGE.to_string()),
            imports: vec![DEFAULT_IMPORT.to_string()],
            indent: "\t".to_string(),
            extension: "java".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package declaration.
    #[must_use]
    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    /// Replaces the import list.
    #[must_use]
    pub fn with_imports(mut self, imports: Vec<String>) -> Self {
        self.imports = imports;
        self
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the output file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Applies the package and imports a schema file declares.
    #[must_use]
    pub fn merged_with(mut self, grammar: &Grammar) -> Self {
        if let Some(package) = &grammar.package {
            self.package = Some(package.clone());
        }
        if let Some(imports) = &grammar.imports {
            self.imports = imports.clone();
        }
        self
    }

    /// Returns the indentation for the given nesting depth.
    #[must_use]
    pub fn indent_at(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package.as_deref(), Some(DEFAULT_PACKAGE));
        assert_eq!(config.imports, vec![DEFAULT_IMPORT.to_string()]);
        assert_eq!(config.indent, "\t");
        assert_eq!(config.extension, "java");
    }

    #[test]
    fn test_builder_methods() {
        let config = GeneratorConfig::new()
            .with_package(None)
            .with_imports(Vec::new())
            .with_indent("    ")
            .with_extension("txt");

        assert!(config.package.is_none());
        assert!(config.imports.is_empty());
        assert_eq!(config.indent_at(2), "        ");
        assert_eq!(config.extension, "txt");
    }

    #[test]
    fn test_merged_with_grammar() {
        let mut grammar = Grammar::new();
        grammar.package = Some("org.example.ast".to_string());

        let config = GeneratorConfig::default().merged_with(&grammar);
        assert_eq!(config.package.as_deref(), Some("org.example.ast"));
        // Imports untouched when the schema declares none.
        assert_eq!(config.imports, vec![DEFAULT_IMPORT.to_string()]);

        grammar.imports = Some(vec!["java.util.Map".to_string()]);
        let config = GeneratorConfig::default().merged_with(&grammar);
        assert_eq!(config.imports, vec!["java.util.Map".to_string()]);
    }
}
