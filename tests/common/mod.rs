//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `bundled_engine`: engine over the documentation shipped with the binary
//! - `sample_engine`: engine over [`SAMPLE_DOCUMENT`], a small document with known scores
//! - `temp_docs`: an empty [`TempDocs`] directory for file-backed sources

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use userdoc::{BundledSource, DocEngine, TextSource};

/// Small document whose search scores are easy to work out by hand.
#[allow(dead_code)] // Used across different integration test crates
pub const SAMPLE_DOCUMENT: &str = "\
# Welcome to FileX

Start here for an overview of the application.

## Quick Start

Drop files on the window and press Convert.

## Settings and Configuration

Open the panel from the toolbar to change defaults.

## Troubleshooting and Support

Check the history list when a conversion fails.
";

/// Returns the project root directory (where Cargo.toml lives).
#[allow(dead_code)]
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A temporary directory holding documentation and configuration files.
///
/// Cleaned up when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempDocs {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempDocs {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `name` inside the directory and returns the full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(name);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", name, e));
        full_path
    }
}

impl Default for TempDocs {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
#[fixture]
pub fn bundled_engine() -> DocEngine {
    userdoc::tracing::init();
    DocEngine::new(&BundledSource)
}

#[allow(dead_code)]
#[fixture]
pub fn sample_engine() -> DocEngine {
    userdoc::tracing::init();
    DocEngine::new(&TextSource::new("sample", SAMPLE_DOCUMENT))
}

#[allow(dead_code)]
#[fixture]
pub fn temp_docs() -> TempDocs {
    TempDocs::new()
}
