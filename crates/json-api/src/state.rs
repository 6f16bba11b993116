//! State

use std::sync::Arc;

use catalog_app::{
    client::CatalogClient,
    proxy::{HttpSubresourceProxy, SubresourceProxy},
};

use crate::config::{FallbackMode, catalog::CatalogConfig};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) proxy: Arc<dyn SubresourceProxy>,
    pub(crate) fallback: FallbackMode,
}

impl State {
    #[must_use]
    pub(crate) fn new(proxy: Arc<dyn SubresourceProxy>, fallback: FallbackMode) -> Self {
        Self { proxy, fallback }
    }

    #[must_use]
    pub(crate) fn from_config(config: &CatalogConfig) -> Arc<Self> {
        let client = CatalogClient::new(config.client_config());

        Arc::new(Self::new(
            Arc::new(HttpSubresourceProxy::new(client)),
            config.fallback_mode(),
        ))
    }
}
