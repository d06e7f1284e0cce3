//! CLI bootstrap - the composition root.
//!
//! This module is the only place where the catalog client is instantiated
//! for the CLI adapter. Command handlers receive the composed `CliContext`
//! and reach the catalog through the `CatalogPort` trait.

use std::sync::Arc;

use anyhow::Result;
use marquee_core::{CatalogPort, DEFAULT_NEIGHBOR_WINDOW};
use marquee_yts::{DefaultYtsClient, YtsClientConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog client configuration built from global flags.
    pub catalog: YtsClientConfig,
    /// Page links shown on each side of the current page in `list`.
    pub neighbor_window: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: YtsClientConfig::default(),
            neighbor_window: DEFAULT_NEIGHBOR_WINDOW,
        }
    }
}

impl CliConfig {
    /// Apply global flags (and their environment fallbacks) over the defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut catalog = YtsClientConfig::default();
        if let Some(base_url) = &cli.base_url {
            catalog = catalog.with_base_url(base_url.clone());
        }
        if let Some(page_size) = cli.page_size {
            catalog = catalog.with_page_size(page_size);
        }

        Self {
            catalog,
            ..Self::default()
        }
    }
}

/// Fully composed context for catalog commands.
pub struct CliContext {
    catalog: Arc<dyn CatalogPort>,
    page_size: u32,
    neighbor_window: u32,
}

impl CliContext {
    /// Build a context around any catalog implementation.
    pub fn new(catalog: Arc<dyn CatalogPort>, page_size: u32, neighbor_window: u32) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            neighbor_window,
        }
    }

    /// Access the catalog.
    pub fn catalog(&self) -> &dyn CatalogPort {
        self.catalog.as_ref()
    }

    /// Movies per page.
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page links shown on each side of the current page.
    pub const fn neighbor_window(&self) -> u32 {
        self.neighbor_window
    }
}

/// Bootstrap the CLI context with the YTS catalog client.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the catalog client rejects its
/// configuration, e.g. a non-https base URL.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let client =
        DefaultYtsClient::new(&config.catalog).map_err(|e| CliError::Config(e.to_string()))?;
    let page_size = client.page_size();

    tracing::debug!(
        base_url = config.catalog.base_url(),
        page_size,
        "CLI bootstrap configured catalog"
    );

    Ok(CliContext::new(
        Arc::new(client),
        page_size,
        config.neighbor_window,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use marquee_yts::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    #[test]
    fn test_config_defaults_without_flags() {
        let cli = Cli::parse_from(["marquee", "list"]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.catalog.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.catalog.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.neighbor_window, DEFAULT_NEIGHBOR_WINDOW);
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from([
            "marquee",
            "--base-url",
            "https://mirror.example/api/v2",
            "--page-size",
            "500",
            "list",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.catalog.base_url(), "https://mirror.example/api/v2");
        assert_eq!(config.catalog.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_bootstrap_default_config() {
        let ctx = bootstrap(&CliConfig::default()).unwrap();
        assert_eq!(ctx.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(ctx.neighbor_window(), DEFAULT_NEIGHBOR_WINDOW);
    }

    #[test]
    fn test_bootstrap_rejects_plain_http() {
        let config = CliConfig {
            catalog: YtsClientConfig::default().with_base_url("http://yts.mx/api/v2"),
            ..CliConfig::default()
        };
        let err = bootstrap(&config).err().unwrap();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 78);
    }
}
