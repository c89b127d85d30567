//! Abstract base type generation.

use super::variants::VariantGenerator;
use crate::config::GeneratorConfig;
use treegen_schema::ir::HierarchyIr;

/// Generator for the base type enclosing every variant.
pub struct HierarchyGenerator<'a> {
    ir: &'a HierarchyIr,
    config: &'a GeneratorConfig,
}

impl<'a> HierarchyGenerator<'a> {
    /// Creates a new hierarchy generator.
    #[must_use]
    pub fn new(ir: &'a HierarchyIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the base type with one nested type per variant, in input order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let variants = VariantGenerator::new(self.config);

        output.push_str(&format!("abstract class {} {{\n", self.ir.base_name));
        for variant in &self.ir.variants {
            output.push_str(&variants.generate(variant));
        }
        output.push_str("}\n");

        output
    }
}
