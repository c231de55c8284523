//! Document sectioning: key generation, splitting and the section registry.

pub(crate) mod key;
pub(crate) mod registry;
pub(crate) mod splitter;

pub use key::{DEFAULT_KEY, title_to_key};
pub use registry::{Lookup, Section, SectionRegistry};
pub use splitter::split_sections;
