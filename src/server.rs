//! MCP server exposing the documentation engine as tools.

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::EngineConfig;
use crate::engine::DocEngine;
use crate::source::DocumentSource;
use crate::tools::reload::{ReloadDocsRequest, handle_reload_docs};
use crate::tools::search::{SearchDocsRequest, handle_search_docs};
use crate::tools::section::{
    OpenSectionRequest, handle_clear_search, handle_go_back, handle_go_home, handle_open_section,
};
use crate::tools::topics::handle_list_topics;

/// MCP server for the user documentation.
#[derive(Clone)]
pub struct DocServer {
    /// The engine is single-threaded; every tool call holds the lock for its whole duration.
    engine: Arc<Mutex<DocEngine>>,

    /// Where `reload_docs` reads from.
    source: Arc<dyn DocumentSource>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocServer")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}

#[tool_router]
impl DocServer {
    /// Create a server over `source`, loading it immediately.
    pub fn new(source: Arc<dyn DocumentSource>, config: &EngineConfig) -> Self {
        let engine = DocEngine::with_config(source.as_ref(), config);
        if engine.is_fallback() {
            tracing::warn!("Serving built-in documentation: {}", engine.origin());
        }
        Self {
            engine: Arc::new(Mutex::new(engine)),
            source,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server over the source named by `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Arc::from(config.source()), config)
    }

    /// Lock the engine. A panic in an earlier call cannot leave the engine half-updated in a
    /// way later calls depend on, so a poisoned lock is recovered.
    pub fn engine(&self) -> MutexGuard<'_, DocEngine> {
        self.engine.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Engine lock poisoned by an earlier panic; continuing");
            PoisonError::into_inner(poisoned)
        })
    }

    #[tool(
        description = "Search the user documentation. Returns matching sections ranked by relevance and grouped by topic, each with a short excerpt. Matching words are highlighted in sections opened afterwards."
    )]
    async fn search_docs(
        &self,
        Parameters(request): Parameters<SearchDocsRequest>,
    ) -> std::result::Result<String, String> {
        handle_search_docs(&mut self.engine(), request)
    }

    #[tool(
        description = "Open a documentation section by key (e.g. 'quick_start') or by title (e.g. 'Quick Start'). Unknown sections show the welcome page. Returns the section as an HTML document."
    )]
    async fn open_section(
        &self,
        Parameters(request): Parameters<OpenSectionRequest>,
    ) -> std::result::Result<String, String> {
        handle_open_section(&mut self.engine(), request)
    }

    #[tool(description = "Go back to the previously opened documentation section.")]
    async fn go_back(&self) -> std::result::Result<String, String> {
        handle_go_back(&mut self.engine())
    }

    #[tool(description = "Open the welcome section of the documentation.")]
    async fn go_home(&self) -> std::result::Result<String, String> {
        Ok(handle_go_home(&mut self.engine()))
    }

    #[tool(
        description = "Clear the active search so sections are no longer highlighted, and show the current section again."
    )]
    async fn clear_search(&self) -> std::result::Result<String, String> {
        Ok(handle_clear_search(&mut self.engine()))
    }

    #[tool(
        description = "List the documentation's table of contents: topic groups and the sections under each, with their keys."
    )]
    async fn list_topics(&self) -> std::result::Result<String, String> {
        Ok(handle_list_topics(&self.engine()))
    }

    #[tool(
        description = "Re-read the documentation source. Skipped when the text is unchanged unless 'force' is set. Resets history and search highlighting."
    )]
    async fn reload_docs(
        &self,
        Parameters(request): Parameters<ReloadDocsRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_reload_docs(
            &mut self.engine(),
            self.source.as_ref(),
            request,
        ))
    }
}

#[tool_handler]
impl ServerHandler for DocServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "userdoc-mcp: FileX user documentation. Use list_topics for the table of contents, \
                 search_docs to find sections, and open_section to read one. go_back and go_home \
                 navigate; clear_search removes highlighting.",
            )
    }
}
