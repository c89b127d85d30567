//! Grammar validation utilities.
//!
//! Rule parsing already rejects malformed rules and duplicate fields. The
//! checks here cover what only shows up across rules: name collisions and
//! names that cannot be used as identifiers or file names.

use crate::error::SchemaError;
use crate::types::Grammar;
use crate::variants::{HierarchyDef, VariantDef};
use std::collections::HashSet;

/// Validates a parsed grammar for correctness.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_grammar(grammar: &Grammar) -> Result<(), SchemaError> {
    let mut seen_bases = HashSet::new();

    for hierarchy in &grammar.hierarchies {
        if !seen_bases.insert(hierarchy.base_name.as_str()) {
            return Err(SchemaError::DuplicateBase {
                name: hierarchy.base_name.clone(),
            });
        }
        validate_hierarchy(hierarchy)?;
    }

    Ok(())
}

/// Validates a single base type and its variants.
///
/// # Errors
/// Returns `SchemaError` if a name is not an identifier or a variant name repeats.
pub fn validate_hierarchy(hierarchy: &HierarchyDef) -> Result<(), SchemaError> {
    if !is_identifier(&hierarchy.base_name) {
        return Err(SchemaError::invalid_identifier(
            "base",
            &hierarchy.base_name,
        ));
    }

    let mut seen_variants = HashSet::new();
    for variant in &hierarchy.variants {
        if !seen_variants.insert(variant.name.as_str()) {
            return Err(SchemaError::DuplicateVariant {
                base: hierarchy.base_name.clone(),
                variant: variant.name.clone(),
            });
        }
        validate_variant(variant)?;
    }

    Ok(())
}

/// Validates the names of a variant and its fields.
fn validate_variant(variant: &VariantDef) -> Result<(), SchemaError> {
    if !is_identifier(&variant.name) {
        return Err(SchemaError::invalid_identifier("variant", &variant.name));
    }

    for field in &variant.fields {
        if !is_identifier(&field.name) {
            return Err(SchemaError::invalid_identifier("field", &field.name));
        }
    }

    Ok(())
}

/// Returns true if `name` is a letter, `_` or `$` followed by letters,
/// digits, `_` or `$`. Letters and digits are Unicode, as in Java.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
