//! Catalog Config

use catalog_app::client::{ClientConfig, DEFAULT_CATALOG_API_URL};
use clap::Args;

/// What the proxy answers when the catalog cannot be reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FallbackMode {
    /// Report the failure as `502 Bad Gateway`.
    #[default]
    Strict,

    /// Answer with a placeholder product, flagged by a response header.
    /// Development only.
    Synthetic,
}

/// Upstream catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Catalog service base URL
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_CATALOG_API_URL)]
    pub catalog_api_url: String,

    /// Serve a synthetic product when the catalog is unreachable
    #[arg(long, env = "CATALOG_DEV_FALLBACK", default_value_t = false)]
    pub dev_fallback: bool,
}

impl CatalogConfig {
    /// Client settings for the forwarder.
    ///
    /// Credentials are never configured here: each request carries the
    /// caller's own `Authorization` header.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.catalog_api_url.clone(),
            authorization: None,
        }
    }

    /// Policy for transport failures.
    #[must_use]
    pub fn fallback_mode(&self) -> FallbackMode {
        if self.dev_fallback {
            FallbackMode::Synthetic
        } else {
            FallbackMode::Strict
        }
    }
}
