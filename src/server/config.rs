//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-field human readable lines
    #[default]
    Human,
    /// Single-line compact output
    Compact,
}

/// Employee directory HTTP server configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "employee-directory")]
#[command(about = "Employee directory HTTP API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "EMPLOYEE_DIRECTORY_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: SocketAddr,

    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, env = "EMPLOYEE_DIRECTORY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(
        long,
        env = "EMPLOYEE_DIRECTORY_LOG_FORMAT",
        default_value = "human",
        value_enum
    )]
    pub log_format: LogFormat,

    /// Enable CORS (Cross-Origin Resource Sharing)
    #[arg(long, env = "EMPLOYEE_DIRECTORY_CORS_ENABLED", default_value = "false")]
    pub cors_enabled: bool,

    /// Request body size limit in bytes (default 10MB)
    #[arg(long, env = "EMPLOYEE_DIRECTORY_BODY_LIMIT", default_value = "10485760")]
    pub body_limit: usize,

    /// Glob of CSV/JSON employee files registered at startup (repeatable)
    #[arg(long = "seed", env = "EMPLOYEE_DIRECTORY_SEED", value_delimiter = ',')]
    pub seed_patterns: Vec<String>,

    /// Append operation outcomes to this file in addition to the log
    #[arg(long, env = "EMPLOYEE_DIRECTORY_INGEST_LOG_FILE")]
    pub ingest_log_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
            log_format: LogFormat::Human,
            cors_enabled: false,
            body_limit: 10 * 1024 * 1024,
            seed_patterns: Vec::new(),
            ingest_log_file: None,
        }
    }
}
