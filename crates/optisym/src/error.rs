//! Error types for optisym operations.
//!
//! This module provides the main error type [`OptisymError`] which wraps the
//! failures that can occur while building or exporting a symbol.

use std::io;

use thiserror::Error;

use optisym_core::GeometryError;

/// The main error type for optisym operations.
#[derive(Debug, Error)]
pub enum OptisymError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_converts() {
        let err: OptisymError = GeometryError::InvalidGeometry {
            width: 0.0,
            height: 1.0,
        }
        .into();

        assert!(matches!(err, OptisymError::Geometry(_)));
        assert!(err.to_string().starts_with("invalid geometry"));
    }

    #[test]
    fn test_unknown_symbol_message() {
        let err = OptisymError::UnknownSymbol("laser".to_string());
        assert_eq!(err.to_string(), "unknown symbol `laser`");
    }
}
