//! Ordered, key-addressable collection of parsed sections.

use ahash::AHashMap;
use serde::Serialize;

use super::key::DEFAULT_KEY;

/// One addressable unit of the documentation.
///
/// `raw_body` starts with the heading line that introduced the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub raw_body: String,
}

/// Outcome of resolving a requested key against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The requested key exists.
    Exact(&'a Section),
    /// The requested key is unknown; this is the default section.
    Default(&'a Section),
    /// Neither the requested key nor the default section exists.
    Missing,
}

/// Sections in document order, each key present exactly once.
///
/// Never patched in place: a reload builds a new registry.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    by_key: AHashMap<String, usize>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section. Returns `false` (and stores nothing) for an empty or duplicate key.
    pub(crate) fn insert(&mut self, section: Section) -> bool {
        if section.key.is_empty() || self.by_key.contains_key(&section.key) {
            return false;
        }
        self.by_key.insert(section.key.clone(), self.sections.len());
        self.sections.push(section);
        true
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.by_key.get(key).map(|&idx| &self.sections[idx])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// The default (welcome) section, if the document has one.
    pub fn default_section(&self) -> Option<&Section> {
        self.get(DEFAULT_KEY)
    }

    /// Resolve `key`, falling back to the default section on a miss.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        if let Some(section) = self.get(key) {
            Lookup::Exact(section)
        } else if let Some(section) = self.default_section() {
            Lookup::Default(section)
        } else {
            Lookup::Missing
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
