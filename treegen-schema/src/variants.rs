//! Variant definitions and the grammar rule parser.
//!
//! A rule has the shape `"<VariantName> : <Type> <name>, <Type> <name>, ..."`.
//! Field order is significant: it is both the constructor parameter order
//! and the field declaration order of the generated type.

use crate::error::ParseError;
use std::collections::HashSet;

/// One typed field of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Type, copied verbatim apart from whitespace normalization.
    pub type_name: String,
    /// Field name (last whitespace-separated token of the raw field).
    pub name: String,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// Returns the `"<Type> <name>"` form of the field.
    #[must_use]
    pub fn declaration(&self) -> String {
        format!("{} {}", self.type_name, self.name)
    }
}

/// Parsed form of one grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDef {
    /// Variant name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl VariantDef {
    /// Creates a new variant definition.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the fields joined as a comma-separated parameter list.
    #[must_use]
    pub fn parameter_list(&self) -> String {
        self.fields
            .iter()
            .map(FieldDef::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A base type together with its ordered variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyDef {
    /// Name of the abstract base type.
    pub base_name: String,
    /// Variants in input order.
    pub variants: Vec<VariantDef>,
}

impl HierarchyDef {
    /// Creates an empty hierarchy.
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            variants: Vec::new(),
        }
    }

    /// Parses every rule into a hierarchy, stopping at the first bad rule.
    ///
    /// # Errors
    /// Returns `ParseError` for the first malformed rule.
    pub fn from_rules<I, S>(base_name: impl Into<String>, rules: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hierarchy = Self::new(base_name);
        for rule in rules {
            hierarchy.add_variant(parse_rule(rule.as_ref())?);
        }
        Ok(hierarchy)
    }

    /// Appends a variant.
    pub fn add_variant(&mut self, variant: VariantDef) {
        self.variants.push(variant);
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|v| v.name == name)
    }
}

/// Parses one raw rule into a [`VariantDef`].
///
/// The rule is split on the first `:` only. The field list is split on `,`
/// and every field on its last run of whitespace, so multi-token types
/// such as `"Map.Entry key"` keep every token before the name.
///
/// # Errors
/// - `MalformedRule` if the separator, the variant name or the fields are missing
/// - `MalformedField` if a field has no whitespace between type and name
/// - `DuplicateField` if two fields share a name
pub fn parse_rule(raw: &str) -> Result<VariantDef, ParseError> {
    let (name, field_list) = raw
        .split_once(':')
        .ok_or_else(|| ParseError::malformed_rule(raw, "missing ':' separator"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::malformed_rule(raw, "empty variant name"));
    }
    if name.contains(char::is_whitespace) {
        return Err(ParseError::malformed_rule(
            raw,
            "variant name contains whitespace",
        ));
    }

    let raw_fields: Vec<&str> = field_list.split(',').map(str::trim).collect();
    if raw_fields.iter().all(|f| f.is_empty()) {
        return Err(ParseError::malformed_rule(raw, "empty field list"));
    }

    let mut fields = Vec::with_capacity(raw_fields.len());
    let mut seen = HashSet::new();
    for raw_field in raw_fields {
        let field = parse_field(name, raw_field)?;
        if !seen.insert(field.name.clone()) {
            return Err(ParseError::DuplicateField {
                variant: name.to_string(),
                field: field.name,
            });
        }
        fields.push(field);
    }

    Ok(VariantDef::new(name, fields))
}

/// Parses one `"<Type> <name>"` field of `variant`.
///
/// # Errors
/// Returns `MalformedField` if the field has fewer than two tokens.
pub fn parse_field(variant: &str, raw: &str) -> Result<FieldDef, ParseError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.split_last() {
        Some((name, type_tokens)) if !type_tokens.is_empty() => {
            Ok(FieldDef::new(type_tokens.join(" "), *name))
        }
        _ => Err(ParseError::malformed_field(variant, raw.trim())),
    }
}
