//! Engine configuration.
//!
//! Settings come from a TOML file; every field has a default, so a missing file is not an
//! error. Lookup order: `$USERDOC_CONFIG`, `./userdoc.toml`, then
//! `<config dir>/userdoc/config.toml`. `$USERDOC_DOCUMENT` overrides the document path.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::search::KeywordIndex;
use crate::source::{BundledSource, DEFAULT_MARKER, DocumentSource, FileSource};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "USERDOC_CONFIG";

/// Environment variable naming the documentation file, overriding the configuration.
pub const DOCUMENT_ENV: &str = "USERDOC_DOCUMENT";

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Documentation file. The bundled documentation is used when unset.
    pub document: Option<PathBuf>,
    /// Text the documentation must contain; its level-1 heading is the default section.
    pub marker: String,
    /// Extra boost keywords per section key, merged into the built-in table.
    pub boost: BTreeMap<String, Vec<String>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            document: None,
            marker: DEFAULT_MARKER.to_string(),
            boost: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse engine configuration")
    }

    /// Read configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration at {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration at {}", path.display()))
    }

    /// Load the first configuration file that exists among `candidates`, or the defaults.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self> {
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                Self::from_path(path)
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from the standard locations and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_first(&candidate_paths())?;
        if let Some(document) = std::env::var_os(DOCUMENT_ENV) {
            config.document = Some(PathBuf::from(document));
        }
        Ok(config)
    }

    /// The documentation source this configuration points at.
    pub fn source(&self) -> Box<dyn DocumentSource> {
        match &self.document {
            Some(path) => Box::new(FileSource::new(path.clone())),
            None => Box::new(BundledSource),
        }
    }

    /// Built-in boost keywords extended with the configured ones.
    pub fn keyword_index(&self) -> KeywordIndex {
        let mut index = KeywordIndex::default();
        for (key, terms) in &self.boost {
            index.extend(key, terms.iter().map(String::as_str));
        }
        index
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    paths.push(PathBuf::from("userdoc.toml"));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("userdoc").join("config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_empty_config_uses_defaults() {
        let_assert!(Ok(config) = EngineConfig::from_toml_str(""));
        check!(config == EngineConfig::default());
        check!(config.marker == DEFAULT_MARKER);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            document = "/srv/docs/manual.txt"
            marker = "Welcome to FileX"

            [boost]
            file_history = ["log", "records"]
        "#;
        let_assert!(Ok(config) = EngineConfig::from_toml_str(toml));
        check!(config.document == Some(PathBuf::from("/srv/docs/manual.txt")));
        check!(config.boost["file_history"] == ["log", "records"]);

        let index = config.keyword_index();
        check!(index.is_boosted("file_history", "records"));
        check!(index.is_boosted("settings", "preferences"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        check!(EngineConfig::from_toml_str("documnet = \"typo.txt\"").is_err());
    }

    #[test]
    fn test_load_first_picks_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let present = dir.path().join("userdoc.toml");
        std::fs::write(&present, "marker = \"Custom Manual\"\n").expect("write config");

        let candidates = vec![dir.path().join("missing.toml"), present];
        let_assert!(Ok(config) = EngineConfig::load_first(&candidates));
        check!(config.marker == "Custom Manual");
    }

    #[test]
    fn test_load_first_without_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let_assert!(Ok(config) = EngineConfig::load_first(&[dir.path().join("nope.toml")]));
        check!(config == EngineConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("userdoc.toml");
        std::fs::write(&path, "marker = [").expect("write config");
        let_assert!(Err(e) = EngineConfig::load_first(&[path]));
        check!(format!("{:#}", e).contains("Invalid configuration"));
    }

    #[test]
    fn test_source_selection() {
        check!(EngineConfig::default().source().name().starts_with("bundled:"));
        let config = EngineConfig {
            document: Some(PathBuf::from("/tmp/manual.txt")),
            ..EngineConfig::default()
        };
        check!(config.source().name() == "/tmp/manual.txt");
    }
}
