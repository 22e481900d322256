//! HTTP server wiring
//!
//! # Example
//!
//! ```ignore
//! use employee_directory::server::{DirectoryServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = DirectoryServer::new(ServerConfig::default()).await.unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod routes;
pub mod seed;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::DirectoryResult;
use crate::observability::{CompositeObserver, DirectoryObserver, FileObserver, TracingObserver};
use crate::service::EmployeeService;
use crate::store::{EmployeeStore, MemoryStore};

pub use config::{LogFormat, ServerConfig};
pub use routes::build_router;
pub use telemetry::init_logging;

/// State shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub service: EmployeeService,
}

impl AppState {
    /// Build state over `store`, wiring observers from `config`.
    pub fn new(config: ServerConfig, store: Arc<dyn EmployeeStore>) -> Self {
        let observer: Arc<dyn DirectoryObserver> = match &config.ingest_log_file {
            Some(path) => Arc::new(CompositeObserver::new(vec![
                Arc::new(TracingObserver),
                Arc::new(FileObserver::new(path)),
            ])),
            None => Arc::new(TracingObserver),
        };
        let service = EmployeeService::new(store).with_observer(observer);
        Self { config, service }
    }
}

/// Employee directory HTTP server
pub struct DirectoryServer {
    state: Arc<AppState>,
    router: Router,
}

impl DirectoryServer {
    /// Create a server over a fresh [`MemoryStore`] and register the configured seed files.
    pub async fn new(config: ServerConfig) -> DirectoryResult<Self> {
        let state = Arc::new(AppState::new(config, Arc::new(MemoryStore::new())));

        if !state.config.seed_patterns.is_empty() {
            let seeded =
                seed::seed_from_patterns(&state.service, &state.config.seed_patterns).await?;
            info!(records = seeded, "startup seeding finished");
        }

        let router = build_router(state.clone());
        Ok(Self { state, router })
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run until Ctrl-C.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            cors = self.state.config.cors_enabled,
            body_limit = self.state.config.body_limit,
            "employee directory listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
