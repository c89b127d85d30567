//! Intermediate representation for code generation.
//!
//! This module turns a parsed [`HierarchyDef`] into a flat list of
//! declarations: one nested type per variant, each with its constructor
//! parameters, constructor assignments and field declarations spelled out.
//! The emitter only has to serialize it.

use crate::variants::{FieldDef, HierarchyDef, VariantDef};

/// Intermediate representation of one base type and its variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyIr {
    /// Name of the abstract base type.
    pub base_name: String,
    /// Nested variant declarations in input order.
    pub variants: Vec<ResolvedVariant>,
}

impl HierarchyIr {
    /// Creates an intermediate representation from a parsed hierarchy.
    #[must_use]
    pub fn from_hierarchy(hierarchy: &HierarchyDef) -> Self {
        let variants = hierarchy
            .variants
            .iter()
            .map(|v| ResolvedVariant::from_variant_def(v, &hierarchy.base_name))
            .collect();

        Self {
            base_name: hierarchy.base_name.clone(),
            variants,
        }
    }

    /// Returns the output file name for the given extension.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.base_name, extension)
    }
}

/// Resolved nested type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    /// Variant type name.
    pub name: String,
    /// Supertype the variant extends.
    pub supertype: String,
    /// Constructor of the variant.
    pub constructor: ConstructorIr,
    /// Field declarations, in constructor parameter order.
    pub fields: Vec<ResolvedField>,
}

impl ResolvedVariant {
    /// Creates a resolved variant from a variant definition.
    #[must_use]
    pub fn from_variant_def(variant: &VariantDef, supertype: &str) -> Self {
        let fields: Vec<ResolvedField> = variant
            .fields
            .iter()
            .map(ResolvedField::from_field_def)
            .collect();

        Self {
            name: variant.name.clone(),
            supertype: supertype.to_string(),
            constructor: ConstructorIr::for_fields(&fields),
            fields,
        }
    }
}

/// Constructor taking every field, assigning each once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorIr {
    /// Parameters in field order.
    pub params: Vec<ResolvedField>,
    /// One assignment per parameter, in field order.
    pub assignments: Vec<Assignment>,
}

impl ConstructorIr {
    /// Builds the constructor for a field list.
    #[must_use]
    pub fn for_fields(fields: &[ResolvedField]) -> Self {
        Self {
            params: fields.to_vec(),
            assignments: fields
                .iter()
                .map(|f| Assignment {
                    target: f.name.clone(),
                    source: f.name.clone(),
                })
                .collect(),
        }
    }
}

/// Assignment of a constructor parameter to an instance field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Instance field being assigned.
    pub target: String,
    /// Parameter supplying the value.
    pub source: String,
}

/// Resolved field information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Field name.
    pub name: String,
    /// Type name, copied verbatim.
    pub type_name: String,
}

impl ResolvedField {
    /// Creates a resolved field from a field definition.
    #[must_use]
    pub fn from_field_def(field: &FieldDef) -> Self {
        Self {
            name: field.name.clone(),
            type_name: field.type_name.clone(),
        }
    }
}
