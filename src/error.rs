//! Error handling types and utilities.

/// A specialized Result type for host-side operations (configuration, server startup).
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Reason the documentation source could not be used.
///
/// The engine never returns this to its caller: it substitutes the built-in default
/// document and records the reason in [`crate::source::DocumentOrigin::Fallback`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The provider could not produce the document at all.
    #[error("documentation source '{source_name}' is unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
    /// The provider produced nothing but whitespace.
    #[error("documentation source '{source_name}' is empty")]
    Empty { source_name: String },
    /// The text does not look like the expected document.
    #[error("documentation source '{source_name}' does not contain the marker '{marker}'")]
    MarkerMissing { source_name: String, marker: String },
    /// The text has no headings, so splitting it yields no sections.
    #[error("documentation source '{source_name}' contains no sections")]
    NoSections { source_name: String },
}

impl SourceError {
    /// Name of the source that failed.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Unavailable { source_name, .. }
            | Self::Empty { source_name }
            | Self::NoSections { source_name }
            | Self::MarkerMissing { source_name, .. } => source_name,
        }
    }
}
