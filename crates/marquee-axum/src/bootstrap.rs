//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the catalog client is wired to the
//! web adapter.

use std::sync::Arc;

use anyhow::Result;
use marquee_core::{CatalogPort, DEFAULT_NEIGHBOR_WINDOW};
use marquee_yts::{DefaultYtsClient, YtsClientConfig};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9890;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Page links shown on each side of the current page.
    pub neighbor_window: u32,
    /// Upstream catalog client configuration.
    pub catalog: YtsClientConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            neighbor_window: DEFAULT_NEIGHBOR_WINDOW,
            catalog: YtsClientConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the neighbor window for pagination controls.
    #[must_use]
    pub const fn with_neighbor_window(mut self, window: u32) -> Self {
        self.neighbor_window = window;
        self
    }

    /// Set the upstream catalog configuration.
    #[must_use]
    pub fn with_catalog(mut self, catalog: YtsClientConfig) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Catalog client as trait object.
    pub catalog: Arc<dyn CatalogPort>,
    /// Movies per list page.
    pub page_size: u32,
    /// Page links shown on each side of the current page.
    pub neighbor_window: u32,
}

impl AxumContext {
    /// Build a context around any catalog implementation.
    pub fn new(catalog: Arc<dyn CatalogPort>, page_size: u32, neighbor_window: u32) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            neighbor_window,
        }
    }
}

/// Bootstrap the Axum server with the YTS catalog client.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let client = DefaultYtsClient::new(&config.catalog)?;
    let page_size = client.page_size();

    tracing::info!(
        base_url = config.catalog.base_url(),
        page_size,
        neighbor_window = config.neighbor_window,
        "Axum bootstrap configured catalog"
    );

    Ok(AxumContext::new(
        Arc::new(client),
        page_size,
        config.neighbor_window,
    ))
}

/// Start the Axum server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("marquee web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
