//! App Context

use crate::{
    client::{CatalogClient, ClientConfig},
    domain::{
        Categories, Coupons, Currencies, Deliverables, Guidelines, ModifierTypes, Products,
        ResourceClient,
    },
    notifications::Notifications,
};

/// Every catalog client plus the session's notification context.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub products: ResourceClient<Products>,
    pub categories: ResourceClient<Categories>,
    pub coupons: ResourceClient<Coupons>,
    pub currencies: ResourceClient<Currencies>,
    pub deliverables: ResourceClient<Deliverables>,
    pub guidelines: ResourceClient<Guidelines>,
    pub modifier_types: ResourceClient<ModifierTypes>,
    pub notifications: Notifications,
}

impl AppContext {
    /// Build application context sharing one connection pool.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        let client = CatalogClient::new(config);

        Self {
            products: ResourceClient::new(client.clone()),
            categories: ResourceClient::new(client.clone()),
            coupons: ResourceClient::new(client.clone()),
            currencies: ResourceClient::new(client.clone()),
            deliverables: ResourceClient::new(client.clone()),
            guidelines: ResourceClient::new(client.clone()),
            modifier_types: ResourceClient::new(client),
            notifications: Notifications::new(),
        }
    }
}
