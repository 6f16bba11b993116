//! Server configuration module

use clap::Parser;

use crate::config::{
    catalog::CatalogConfig, observability::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod catalog;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use catalog::FallbackMode;
pub(crate) use observability::LogFormat;

/// Catalog proxy server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Catalog proxy server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Upstream catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["catalog-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.catalog.fallback_mode(), FallbackMode::Strict);
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn dev_fallback_flag_selects_synthetic_mode() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--dev-fallback",
            "--catalog-api-url",
            "http://localhost:3000/",
        ])?;

        assert_eq!(config.catalog.fallback_mode(), FallbackMode::Synthetic);
        assert_eq!(config.catalog.catalog_api_url, "http://localhost:3000/");

        Ok(())
    }
}
