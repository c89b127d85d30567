//! Nested variant type generation.

use crate::config::GeneratorConfig;
use treegen_schema::ir::{ResolvedField, ResolvedVariant};

/// Generator for the nested type of one variant.
pub struct VariantGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new variant generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the nested type declaration for a variant.
    #[must_use]
    pub fn generate(&self, variant: &ResolvedVariant) -> String {
        let mut output = String::new();
        let indent = self.config.indent_at(1);

        output.push_str(&format!(
            "{}static class {} extends {} {{\n",
            indent, variant.name, variant.supertype
        ));
        output.push_str(&self.generate_constructor(variant));
        output.push('\n');
        for field in &variant.fields {
            output.push_str(&self.generate_field(field));
        }
        output.push_str(&format!("{}}}\n", indent));

        output
    }

    /// Generates the constructor assigning every field once.
    fn generate_constructor(&self, variant: &ResolvedVariant) -> String {
        let mut output = String::new();
        let indent = self.config.indent_at(2);
        let body_indent = self.config.indent_at(3);

        let params = variant
            .constructor
            .params
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        output.push_str(&format!("{}{}({}) {{\n", indent, variant.name, params));
        for assignment in &variant.constructor.assignments {
            output.push_str(&format!(
                "{}this.{} = {};\n",
                body_indent, assignment.target, assignment.source
            ));
        }
        output.push_str(&format!("{}}}\n", indent));

        output
    }

    /// Generates an assign-once field declaration.
    fn generate_field(&self, field: &ResolvedField) -> String {
        format!(
            "{}final {} {};\n",
            self.config.indent_at(2),
            field.type_name,
            field.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegen_schema::parse_rule;

    fn resolve(rule: &str) -> ResolvedVariant {
        let variant = parse_rule(rule).expect("Failed to parse");
        ResolvedVariant::from_variant_def(&variant, "Expr")
    }

    #[test]
    fn test_generate_binary() {
        let config = GeneratorConfig::default();
        let generator = VariantGenerator::new(&config);
        let output = generator.generate(&resolve("Binary : Expr left, Token operator, Expr right"));

        let expected = "\tstatic class Binary extends Expr {\n\
                        \t\tBinary(Expr left, Token operator, Expr right) {\n\
                        \t\t\tthis.left = left;\n\
                        \t\t\tthis.operator = operator;\n\
                        \t\t\tthis.right = right;\n\
                        \t\t}\n\
                        \n\
                        \t\tfinal Expr left;\n\
                        \t\tfinal Token operator;\n\
                        \t\tfinal Expr right;\n\
                        \t}\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_single_field() {
        let config = GeneratorConfig::default();
        let generator = VariantGenerator::new(&config);
        let output = generator.generate(&resolve("Literal : Object value"));

        assert!(output.contains("\t\tLiteral(Object value) {\n"));
        assert!(!output.contains(", )"));
        assert!(!output.contains("(,"));
        assert_eq!(output.matches("this.").count(), 1);
        assert_eq!(output.matches("final ").count(), 1);
    }

    #[test]
    fn test_generate_with_custom_indent() {
        let config = GeneratorConfig::default().with_indent("  ");
        let generator = VariantGenerator::new(&config);
        let output = generator.generate(&resolve("Grouping : Expr expression"));

        assert!(output.starts_with("  static class Grouping extends Expr {\n"));
        assert!(output.contains("      this.expression = expression;\n"));
        assert!(output.contains("    final Expr expression;\n"));
    }

    #[test]
    fn test_multi_token_type_is_verbatim() {
        let config = GeneratorConfig::default();
        let generator = VariantGenerator::new(&config);
        let output = generator.generate(&resolve("Call : Expr callee, List<Expr> arguments"));

        assert!(output.contains("Call(Expr callee, List<Expr> arguments)"));
        assert!(output.contains("final List<Expr> arguments;"));
    }
}
