//! Campus Assistant - HTTP REST API for the college information service
//!
//! This binary serves the chat, FAQ, file repository, analytics, and
//! notification endpoints backed by the FAQ matching core.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
