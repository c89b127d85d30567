//! Top-level source file generation.

use crate::config::GeneratorConfig;
use crate::java::HierarchyGenerator;
use treegen_schema::ir::HierarchyIr;

/// Generator for one complete source file.
pub struct Generator<'a> {
    ir: &'a HierarchyIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a HierarchyIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the file: preamble, then the base type with its variants.
    ///
    /// The output depends only on the IR and the config.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_preamble();
        output.push_str(&HierarchyGenerator::new(self.ir, self.config).generate());
        output
    }

    /// Returns the output file name.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.ir.file_name(&self.config.extension)
    }

    /// Generates the package declaration and imports.
    fn generate_preamble(&self) -> String {
        let mut output = String::new();

        if let Some(package) = &self.config.package {
            output.push_str(&format!("package {};\n\n", package));
        }

        for import in &self.config.imports {
            output.push_str(&format!("import {};\n", import));
        }
        if !self.config.imports.is_empty() {
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegen_schema::HierarchyDef;

    fn create_test_ir() -> HierarchyIr {
        let hierarchy = HierarchyDef::from_rules(
            "Expr",
            [
                "Binary : Expr left, Token operator, Expr right",
                "Literal : Object value",
            ],
        )
        .expect("Failed to parse");
        HierarchyIr::from_hierarchy(&hierarchy)
    }

    #[test]
    fn test_generate_full_file() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = Generator::new(&ir, &config).generate();

        let expected = "package comp.craftinginterpreters.lox;\n\
                        \n\
                        import java.util.List;\n\
                        \n\
                        abstract class Expr {\n\
                        \tstatic class Binary extends Expr {\n\
                        \t\tBinary(Expr left, Token operator, Expr right) {\n\
                        \t\t\tthis.left = left;\n\
                        \t\t\tthis.operator = operator;\n\
                        \t\t\tthis.right = right;\n\
                        \t\t}\n\
                        \n\
                        \t\tfinal Expr left;\n\
                        \t\tfinal Token operator;\n\
                        \t\tfinal Expr right;\n\
                        \t}\n\
                        \tstatic class Literal extends Expr {\n\
                        \t\tLiteral(Object value) {\n\
                        \t\t\tthis.value = value;\n\
                        \t\t}\n\
                        \n\
                        \t\tfinal Object value;\n\
                        \t}\n\
                        }\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();

        let first = Generator::new(&ir, &config).generate();
        let second = Generator::new(&ir.clone(), &config).generate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_preamble_without_package_or_imports() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default()
            .with_package(None)
            .with_imports(Vec::new());
        let output = Generator::new(&ir, &config).generate();

        assert!(output.starts_with("abstract class Expr {\n"));
    }

    #[test]
    fn test_preamble_multiple_imports() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default().with_imports(vec![
            "java.util.List".to_string(),
            "java.util.Map".to_string(),
        ]);
        let output = Generator::new(&ir, &config).generate();

        assert!(output.contains("import java.util.List;\nimport java.util.Map;\n\nabstract class"));
    }

    #[test]
    fn test_file_name() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        assert_eq!(Generator::new(&ir, &config).file_name(), "Expr.java");

        let config = config.with_extension("kt");
        assert_eq!(Generator::new(&ir, &config).file_name(), "Expr.kt");
    }
}
