//! Unit Converter Service
//!
//! HTTP server answering `POST /convert` for the mobile client.

use tracing_subscriber::EnvFilter;

use unit_converter::build_info;
use unit_converter::config::{ServerConfig, DEFAULT_LOG_DIRECTIVE};
use unit_converter::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServerConfig::from_env()?;
    eprintln!("Binding to {}", config.socket_addr());

    server::run(&config).await?;

    Ok(())
}
