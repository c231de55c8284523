//! Documentation sources and the built-in fallback document.
//!
//! The host hands the engine a [`DocumentSource`]; [`load_document`] reads it once and
//! substitutes [`DEFAULT_DOCUMENT`] whenever the text is unavailable or is not the expected
//! document. The engine is never left without sections.

use std::fmt;
use std::path::PathBuf;

use crate::error::SourceError;

/// Text every real user-documentation file contains (its title line).
pub const DEFAULT_MARKER: &str = "Welcome to FileX";

/// Phrase that only appears in the placeholder content of [`DEFAULT_DOCUMENT`].
pub const PLACEHOLDER_PHRASE: &str = "enterprise-grade";

/// Built-in document used when the real one cannot be loaded.
pub const DEFAULT_DOCUMENT: &str = "\
# Welcome to FileX

FileX is a powerful and secure file conversion utility designed for modern workflows.

## Getting Started

Welcome to FileX! This application provides comprehensive file conversion capabilities
with enterprise-grade security and batch processing features.

### Key Features

- **File Conversion**: Convert between multiple file formats
- **Security**: Secure processing (on-device processing)

## File Conversion

FileX supports conversion between various file formats including documents,
images, and archives. Simply drag files into the application or use the
file picker to select your files.

## Settings

Customize FileX behavior through the Settings panel. You can configure
default output formats, security preferences, and processing options.

## Troubleshooting and Support

If you encounter issues:

1. Verify file permissions
2. Ensure sufficient disk space

For additional help, please visit my documentation.
";

/// The user documentation shipped inside the binary.
const BUNDLED_DOCUMENT: &str = include_str!("../docs/user_documentation.txt");

/// Something that can produce the documentation text.
pub trait DocumentSource: Send + Sync {
    /// Human-readable name used in logs and fallback reports.
    fn name(&self) -> String;

    /// Read the whole document.
    fn read(&self) -> Result<String, SourceError>;
}

/// Documentation read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| SourceError::Unavailable {
            source_name: self.name(),
            reason: e.to_string(),
        })
    }
}

/// The documentation bundled at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl DocumentSource for BundledSource {
    fn name(&self) -> String {
        "bundled:user_documentation.txt".to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        Ok(BUNDLED_DOCUMENT.to_string())
    }
}

/// Documentation held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl DocumentSource for TextSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Where the engine's current text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// The host's source, as provided.
    Source { name: String },
    /// The built-in default document, because the source could not be used.
    Fallback { reason: SourceError },
}

impl DocumentOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source { name } => write!(f, "{}", name),
            Self::Fallback { reason } => write!(f, "built-in default documentation ({})", reason),
        }
    }
}

/// A document ready to be split into sections.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub text: String,
    pub origin: DocumentOrigin,
    /// xxh3 hash of the source text (of the source's own text, even on fallback).
    pub fingerprint: u64,
}

/// Hash document text for change detection.
pub fn fingerprint(text: &str) -> u64 {
    xxhash_rust::xxh3::xxh3_64(text.as_bytes())
}

/// Read `source`, falling back to [`DEFAULT_DOCUMENT`] when it is unavailable, blank, or
/// missing `marker`.
pub fn load_document(source: &dyn DocumentSource, marker: &str) -> LoadedDocument {
    let name = source.name();
    let read = source.read();
    let fingerprint = read.as_deref().map_or(0, fingerprint);

    let checked = read.and_then(|text| {
        if text.trim().is_empty() {
            Err(SourceError::Empty {
                source_name: name.clone(),
            })
        } else if !text.contains(marker) {
            Err(SourceError::MarkerMissing {
                source_name: name.clone(),
                marker: marker.to_string(),
            })
        } else {
            Ok(text)
        }
    });

    match checked {
        Ok(text) => LoadedDocument {
            text,
            origin: DocumentOrigin::Source { name },
            fingerprint,
        },
        Err(reason) => {
            tracing::warn!("Using fallback documentation content: {}", reason);
            LoadedDocument {
                text: DEFAULT_DOCUMENT.to_string(),
                origin: DocumentOrigin::Fallback { reason },
                fingerprint,
            }
        }
    }
}
