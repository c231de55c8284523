//! The hand-authored topic tree shown to clients as a table of contents.

use std::fmt::Write as _;

use crate::engine::DocEngine;

/// Topic groups and the section titles under each, in display order.
pub const TOPIC_TREE: &[(&str, &[&str])] = &[
    ("Getting Started", &["Welcome", "Quick Start", "Key Features"]),
    (
        "File Conversion",
        &["Document Conversion", "Image Conversion", "Archive Management"],
    ),
    ("Configuration", &["Settings and Configuration", "File History"]),
];

/// List the topic tree, each label resolved to its section key.
///
/// Labels whose key is absent from the loaded documentation are marked, since opening them
/// shows the default section instead.
pub fn handle_list_topics(engine: &DocEngine) -> String {
    let mut out = String::from("Documentation topics\n");
    for (group, labels) in TOPIC_TREE {
        let _ = write!(out, "\n{}\n", group);
        for label in *labels {
            let key = engine.title_to_key(label);
            if engine.registry().contains(&key) {
                let _ = writeln!(out, "  • {} [{}]", label, key);
            } else {
                let _ = writeln!(out, "  • {} [{}] (not in loaded documentation)", label, key);
            }
        }
    }
    out
}
