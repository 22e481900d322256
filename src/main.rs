//! Employee directory server CLI
//!
//! Run with: `cargo run -- --help`

use clap::Parser;
use employee_directory::server::{DirectoryServer, ServerConfig, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        log_format = ?config.log_format,
        seeds = config.seed_patterns.len(),
        ingest_log_file = ?config.ingest_log_file,
        "Starting employee directory"
    );

    let server = DirectoryServer::new(config).await?;
    server.run().await?;
    Ok(())
}
