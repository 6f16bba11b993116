//! Prices

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    currencies::CurrencyId,
    ids::Id,
    modifiers::ModifierTypeKey,
    validation::{Validate, ValidationError, require_non_negative},
};

/// Price Id
pub type PriceId = Id<Price>;

/// A price embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Identifier assigned by the catalog, when it exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PriceId>,

    /// Base amount, before any modifier is applied.
    pub amount: Decimal,

    /// Currency of the amount.
    pub currency_id: CurrencyId,

    /// Modifier type adjusting this price, if any.
    #[serde(default)]
    pub modifier_type_id: Option<ModifierTypeKey>,
}

impl Validate for Price {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative(self.amount, "prices.amount")
    }
}
