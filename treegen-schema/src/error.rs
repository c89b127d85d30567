//! Error types for rule parsing and grammar validation.

use thiserror::Error;

/// Error type for rule and schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A rule is missing its `:` separator, its variant name, or its fields.
    #[error("malformed rule '{rule}': {reason}")]
    MalformedRule {
        /// Raw rule text.
        rule: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A field has no type/name split.
    #[error("malformed field '{field}' in variant '{variant}': expected '<Type> <name>'")]
    MalformedField {
        /// Variant the field belongs to.
        variant: String,
        /// Raw field text.
        field: String,
    },

    /// Two fields of one variant share a name.
    #[error("duplicate field '{field}' in variant '{variant}'")]
    DuplicateField {
        /// Variant name.
        variant: String,
        /// Field name.
        field: String,
    },

    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for grammar validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two variants of one base type share a name.
    #[error("duplicate variant '{variant}' in base type '{base}'")]
    DuplicateVariant {
        /// Base type name.
        base: String,
        /// Variant name.
        variant: String,
    },

    /// Two base types of one grammar share a name.
    #[error("duplicate base type '{name}'")]
    DuplicateBase {
        /// Base type name.
        name: String,
    },

    /// A base, variant or field name is not an identifier.
    #[error("invalid {kind} name '{name}'")]
    InvalidIdentifier {
        /// What was being named (base, variant, field).
        kind: &'static str,
        /// Offending name.
        name: String,
    },
}

impl ParseError {
    /// Creates a malformed rule error.
    pub fn malformed_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed field error.
    pub fn malformed_field(variant: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MalformedField {
            variant: variant.into(),
            field: field.into(),
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }
}

impl SchemaError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_rule_display() {
        let err = ParseError::malformed_rule("Bad", "missing ':' separator");
        assert_eq!(err.to_string(), "malformed rule 'Bad': missing ':' separator");
    }

    #[test]
    fn test_duplicate_field_display() {
        let err = ParseError::DuplicateField {
            variant: "Binary".to_string(),
            field: "left".to_string(),
        };
        assert!(err.to_string().contains("'left'"));
        assert!(err.to_string().contains("'Binary'"));
    }

    #[test]
    fn test_schema_error_from_parse_error() {
        let err: SchemaError = ParseError::malformed_field("Literal", "value").into();
        assert!(matches!(err, SchemaError::Parse(ParseError::MalformedField { .. })));
    }
}
