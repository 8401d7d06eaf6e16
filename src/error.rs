//! Crate-level error types.

use std::fmt;

/// Errors produced by the block-builder crate.
///
/// Pointer interactions never produce errors: a click on empty space, a
/// removal that targets the ground, or a drag release from a foreign
/// pointer are all silent no-ops. Only configuration I/O and render
/// surface acquisition can fail.
#[derive(Debug)]
pub enum BuilderError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The host could not provide a render surface for the mount target.
    Surface(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Surface(msg) => {
                write!(f, "render surface unavailable: {msg}")
            }
        }
    }
}

impl std::error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BuilderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
