//! Modifier Types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    currencies::CurrencyId,
    ids::Id,
    products::ProductId,
    validation::{Validate, ValidationError, require_id},
};

/// Modifier Type Key
pub type ModifierTypeKey = Id<ModifierType>;

/// Arithmetic used by a [`PriceAdjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    /// `base * value`
    Multiplier,

    /// `base + value`
    FixedAmount,

    /// Any kind this crate does not know how to apply.
    #[serde(other)]
    Unknown,
}

/// A price adjustment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAdjustment {
    /// Adjustment arithmetic.
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,

    /// Factor or amount, depending on `kind`.
    pub value: Decimal,
}

impl PriceAdjustment {
    /// Apply the adjustment to `base`.
    ///
    /// Unknown kinds and arithmetic overflow leave `base` unchanged.
    #[must_use]
    pub fn apply(&self, base: Decimal) -> Decimal {
        let adjusted = match self.kind {
            AdjustmentKind::Multiplier => base.checked_mul(self.value),
            AdjustmentKind::FixedAmount => base.checked_add(self.value),
            AdjustmentKind::Unknown => None,
        };

        adjusted.unwrap_or(base)
    }
}

/// Limits on where a modifier may be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRestrictions {
    /// Maximum number of values a product may carry for this modifier.
    pub max_values: u32,

    /// Currencies the modifier is limited to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_currencies: Option<Vec<CurrencyId>>,

    /// Products the modifier is limited to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_products: Option<Vec<ProductId>>,
}

/// A named price adjustment rule that product prices can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierType {
    /// Identity of the modifier.
    pub key: ModifierTypeKey,

    /// Display name.
    pub display_name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Author of the record.
    #[serde(default)]
    pub created_by: String,

    /// Adjustment rule, absent for purely informational modifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_adjustment: Option<PriceAdjustment>,

    /// Usage limits.
    #[serde(default)]
    pub value_restrictions: Option<ValueRestrictions>,
}

impl Validate for ModifierType {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.key, "modifierType.key")
    }
}

/// New Modifier Type
///
/// The key is chosen by the caller.
pub type NewModifierType = ModifierType;

/// Modifier Type Update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierTypeUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New adjustment rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_adjustment: Option<PriceAdjustment>,

    /// New usage limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_restrictions: Option<ValueRestrictions>,
}
