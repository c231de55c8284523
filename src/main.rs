use rmcp::{ServiceExt, transport::stdio};
use userdoc::config::EngineConfig;
use userdoc::server::DocServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to stderr; stdout carries the MCP protocol
    userdoc::tracing::init();

    let config = EngineConfig::load()?;
    tracing::info!("Starting userdoc-mcp MCP server");

    let server = DocServer::from_config(&config);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
