//! HTTP server for atomdocs.
//!
//! Serves versioned documentation pages as HTML, a JSON navigation
//! endpoint, and the static assets the pages link to.
//!
//! # Routes
//!
//! ```text
//! GET /                                  default version index
//! GET /docs[/{version}[/{page1}[/{page2}]]]
//! GET /{page1}[/{page2}]                 legacy URLs, default version
//! GET /api/navigation                    {versions, navigation}
//! GET /assets/{*path}                    CSS and JavaScript
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use atomdocs_config::Config;
//! use atomdocs_server::{run_server, server_config_from_config};
//!
//! let config = Config::load(None, None)?;
//! run_server(server_config_from_config(&config, "0.1.0".to_owned())).await?;
//! # Ok(())
//! # }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod template;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use atomdocs_config::NavigationTree;
use atomdocs_site::{Site, SiteConfig};
use atomdocs_storage::FsStorage;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Version served when a URL names none.
    pub default_version: String,
    /// Site name shown in page titles.
    pub site_name: String,
    /// Navigation of every version.
    pub navigation: Arc<NavigationTree>,
    /// Application version (for `ETag` invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
            source_dir: PathBuf::from("app/docs"),
            default_version: atomdocs_config::DEFAULT_VERSION.to_owned(),
            site_name: "Atom".to_owned(),
            navigation: Arc::new(NavigationTree::new()),
            version: String::new(),
        }
    }
}

/// Build the router for a configuration without binding a socket.
#[must_use]
pub fn router(config: &ServerConfig) -> axum::Router {
    let storage = Arc::new(FsStorage::new(config.source_dir.clone()));
    let site = Site::new(
        storage,
        Arc::clone(&config.navigation),
        SiteConfig {
            default_version: config.default_version.clone(),
        },
    );

    app::create_router(Arc::new(AppState {
        site,
        site_name: config.site_name.clone(),
        version: config.version.clone(),
    }))
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the socket can't be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(&config);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        source_dir = %config.source_dir.display(),
        default_version = %config.default_version,
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from atomdocs config.
#[must_use]
pub fn server_config_from_config(config: &atomdocs_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        default_version: config.docs_resolved.default_version.clone(),
        site_name: config.site.name.clone(),
        navigation: Arc::new(config.navigation.clone()),
        version,
    }
}
