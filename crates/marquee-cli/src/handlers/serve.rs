//! Serve command handler.
//!
//! Starts the web front end with the catalog configuration from global flags.

use anyhow::Result;
use marquee_axum::ServerConfig;

use crate::bootstrap::CliConfig;

/// Build the server configuration for `serve`.
pub fn server_config(config: &CliConfig, port: u16, neighbor_window: u32) -> ServerConfig {
    ServerConfig::default()
        .with_port(port)
        .with_neighbor_window(neighbor_window)
        .with_catalog(config.catalog.clone())
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(config: &CliConfig, port: u16, neighbor_window: u32) -> Result<()> {
    println!("Serving Marquee on http://localhost:{port}");
    marquee_axum::start_server(server_config(config, port, neighbor_window)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_yts::YtsClientConfig;

    #[test]
    fn test_server_config_carries_flags() {
        let config = CliConfig {
            catalog: YtsClientConfig::default().with_page_size(24),
            ..CliConfig::default()
        };
        let server = server_config(&config, 8080, 3);

        assert_eq!(server.port, 8080);
        assert_eq!(server.neighbor_window, 3);
        assert_eq!(server.catalog.page_size(), 24);
    }
}
