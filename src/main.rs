//! Trainify
//!
//! An MCP server exposing fitness calculators over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod fitness;
mod mcp;
mod models;
mod tools;

use mcp::TrainifyService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so stdout stays free for the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trainify=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = TrainifyService::new();
    tracing::info!(
        version = build_info::VERSION,
        build = build_info::BUILD_NUMBER,
        "trainify service ready"
    );

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
