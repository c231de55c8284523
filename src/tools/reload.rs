//! Reloading the documentation from its source.

use rmcp::schemars;
use serde::Deserialize;

use crate::engine::DocEngine;
use crate::source::DocumentSource;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ReloadDocsRequest {
    /// Rebuild even when the source text is unchanged (default: false)
    #[serde(default)]
    pub force: bool,
}

/// Re-read the documentation source. Unless forced, nothing happens when the text is
/// unchanged; otherwise history and the search highlight are reset.
pub fn handle_reload_docs(
    engine: &mut DocEngine,
    source: &dyn DocumentSource,
    request: ReloadDocsRequest,
) -> String {
    let reloaded = if request.force {
        engine.reload(source);
        true
    } else {
        engine.refresh(source)
    };

    if !reloaded {
        return format!(
            "Documentation unchanged ({} sections from {}).",
            engine.registry().len(),
            engine.origin()
        );
    }

    let mut out = format!(
        "Reloaded {} sections from {}.",
        engine.registry().len(),
        engine.origin()
    );
    if engine.is_fallback() {
        out.push_str("\nThe source could not be used; built-in default documentation is shown.");
    }
    out
}
