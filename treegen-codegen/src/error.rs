//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Rule or schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] treegen_schema::ParseError),

    /// Grammar validation error.
    #[error("schema error: {0}")]
    Schema(#[from] treegen_schema::SchemaError),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination directory or file could not be created or written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Offending path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let err = CodegenError::write(
            "/readonly/Expr.java",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().contains("/readonly/Expr.java"));
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = treegen_schema::parse_rule("Bad").unwrap_err();
        let err: CodegenError = parse_err.into();
        assert!(matches!(err, CodegenError::Parse(_)));
    }
}
