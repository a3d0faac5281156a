//! Error adapter for converting OptisymError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use optisym::{OptisymError, SymbolKind};

/// Adapter giving an [`OptisymError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a OptisymError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            OptisymError::Geometry(_) => "optisym::geometry",
            OptisymError::UnknownSymbol(_) => "optisym::symbol",
            OptisymError::Style(_) => "optisym::style",
            OptisymError::Io(_) => "optisym::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            OptisymError::Geometry(_) => {
                "--width and --height must be finite numbers greater than zero".to_string()
            }
            OptisymError::UnknownSymbol(_) => {
                let names: Vec<_> = SymbolKind::ALL.iter().map(|kind| kind.name()).collect();
                format!("known symbols: {}", names.join(", "))
            }
            OptisymError::Style(_) => {
                "use a CSS color or one of: optical, rf, electrical".to_string()
            }
            OptisymError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap an [`OptisymError`] so miette can render it.
pub fn to_reportable(err: &OptisymError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use optisym::GeometryError;

    use super::*;

    fn code_of(err: &OptisymError) -> Option<String> {
        to_reportable(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes() {
        let geometry = OptisymError::Geometry(GeometryError::InvalidGeometry {
            width: 0.0,
            height: 1.0,
        });
        assert_eq!(code_of(&geometry).as_deref(), Some("optisym::geometry"));

        let unknown = OptisymError::UnknownSymbol("maser".to_string());
        assert_eq!(code_of(&unknown).as_deref(), Some("optisym::symbol"));

        let style = OptisymError::Style("bad".to_string());
        assert_eq!(code_of(&style).as_deref(), Some("optisym::style"));

        let io = OptisymError::Io(std::io::Error::other("disk full"));
        assert_eq!(code_of(&io).as_deref(), Some("optisym::io"));
    }

    #[test]
    fn test_unknown_symbol_help_lists_names() {
        let err = OptisymError::UnknownSymbol("maser".to_string());
        let help = to_reportable(&err)
            .help()
            .map(|help| help.to_string())
            .unwrap();

        assert!(help.contains("photodetector"));
        assert!(help.contains("waveform_generator"));
    }

    #[test]
    fn test_display_passes_through() {
        let err = OptisymError::UnknownSymbol("maser".to_string());
        assert_eq!(to_reportable(&err).to_string(), "unknown symbol `maser`");
    }

    #[test]
    fn test_io_has_no_help() {
        let err = OptisymError::Io(std::io::Error::other("disk full"));
        assert!(to_reportable(&err).help().is_none());
    }
}
