//! Freezer Door
//!
//! An MCP server for batch cocktail measurements.

use freezer_door::build_info;
use freezer_door::config::Settings;
use freezer_door::mcp::FreezerService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("freezer_door=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();

    build_info::print_startup_banner(&settings);
    eprintln!("Starting MCP server on stdio...");
    tracing::info!(
        "Default unit: {}, simplified: {}",
        settings.default_unit,
        settings.simplified
    );

    let service = FreezerService::new(settings);

    // Create stdio transport
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
