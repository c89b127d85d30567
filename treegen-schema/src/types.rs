//! Grammar definition.
//!
//! A grammar groups one or more base types with the target-language
//! settings a schema file may carry.

use crate::variants::HierarchyDef;

/// Complete grammar, as loaded from a schema file or built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    /// Package (namespace) of the generated sources, if the schema sets one.
    pub package: Option<String>,
    /// Imports declared by the schema, in order. `None` keeps the generator defaults.
    pub imports: Option<Vec<String>>,
    /// Base types in declaration order.
    pub hierarchies: Vec<HierarchyDef>,
}

impl Grammar {
    /// Creates an empty grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a base type to the grammar.
    pub fn add_hierarchy(&mut self, hierarchy: HierarchyDef) {
        self.hierarchies.push(hierarchy);
    }

    /// Looks up a base type by name.
    #[must_use]
    pub fn get_hierarchy(&self, base_name: &str) -> Option<&HierarchyDef> {
        self.hierarchies.iter().find(|h| h.base_name == base_name)
    }

    /// Returns the total number of variants across all base types.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.hierarchies.iter().map(|h| h.variants.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_lookup() {
        let mut grammar = Grammar::new();
        grammar.add_hierarchy(
            HierarchyDef::from_rules("Expr", ["Literal : Object value"]).expect("Failed to parse"),
        );
        grammar.add_hierarchy(
            HierarchyDef::from_rules(
                "Stmt",
                ["Expression : Expr expression", "Print : Expr expression"],
            )
            .expect("Failed to parse"),
        );

        assert!(grammar.get_hierarchy("Stmt").is_some());
        assert!(grammar.get_hierarchy("Decl").is_none());
        assert_eq!(grammar.variant_count(), 3);
    }

    #[test]
    fn test_grammar_default_is_empty() {
        let grammar = Grammar::default();
        assert!(grammar.package.is_none());
        assert!(grammar.imports.is_none());
        assert!(grammar.hierarchies.is_empty());
    }
}
