//! Modifier type lookup and adjusted pricing.

use async_trait::async_trait;
use catalog::{
    modifiers::{ModifierType, ModifierTypeKey},
    pricing::calculate_adjusted_price,
};
use mockall::automock;
use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    client::CatalogError,
    domain::{ModifierTypes, ResourceClient},
};

/// Source of modifier types for price adjustment.
#[automock]
#[async_trait]
pub trait ModifierLookup: Send + Sync {
    /// Retrieve a modifier type by key.
    async fn modifier_type(&self, key: &ModifierTypeKey) -> Result<ModifierType, CatalogError>;
}

#[async_trait]
impl ModifierLookup for ResourceClient<ModifierTypes> {
    async fn modifier_type(&self, key: &ModifierTypeKey) -> Result<ModifierType, CatalogError> {
        self.get(key).await
    }
}

/// Price of `base` after applying the modifier identified by `key`.
///
/// Pricing never fails: a missing key skips the lookup entirely and a failed
/// lookup is logged and treated as "no modifier".
pub async fn get_adjusted_price(
    lookup: &dyn ModifierLookup,
    base: Decimal,
    key: Option<&ModifierTypeKey>,
) -> Decimal {
    let Some(key) = key else {
        return base;
    };

    match lookup.modifier_type(key).await {
        Ok(modifier) => calculate_adjusted_price(base, Some(&modifier)),
        Err(error) => {
            warn!(%key, %error, "modifier lookup failed, using base price");

            base
        }
    }
}
