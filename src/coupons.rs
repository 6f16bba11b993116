//! Coupons

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::Id,
    validation::{Validate, ValidationError, require_id, require_non_negative},
};

/// Coupon Id
pub type CouponId = Id<Coupon>;

/// The only discount type new coupons are created with.
pub const PERCENTAGE_DISCOUNT: &str = "PERCENTAGE";

/// How often a coupon may be redeemed by the same customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageType {
    /// Single redemption.
    OneTime,

    /// Applies to every recurring charge.
    Recurring,
}

/// Discount coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Coupon identifier.
    pub id: CouponId,

    /// Code customers type in.
    pub code: String,

    /// Discount type, e.g. `PERCENTAGE`.
    pub discount_type: String,

    /// Discount value, interpreted according to `discount_type`.
    pub discount_value: Decimal,

    /// Minimum order amount for the coupon to apply.
    #[serde(default)]
    pub min_purchase_amount: Option<Decimal>,

    /// Number of redemptions so far.
    #[serde(default)]
    pub used_count: u64,

    /// Coupon status.
    pub status: String,

    /// Redemption model.
    pub usage_type: UsageType,

    /// Creation time.
    pub created_at: Timestamp,

    /// Last modification time.
    pub updated_at: Timestamp,
}

impl Validate for Coupon {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.id, "coupon.id")?;
        require_non_negative(self.discount_value, "coupon.discountValue")?;

        match self.min_purchase_amount {
            Some(amount) => require_non_negative(amount, "coupon.minPurchaseAmount"),
            None => Ok(()),
        }
    }
}

/// New Coupon
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoupon {
    /// Code customers type in.
    pub code: String,

    /// Requested discount type. Replaced on creation, see [`NewCoupon::normalized`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// Discount value.
    pub discount_value: Decimal,

    /// Minimum order amount for the coupon to apply.
    pub min_purchase_amount: Option<Decimal>,

    /// Initial status.
    pub status: String,

    /// Redemption model.
    pub usage_type: UsageType,
}

impl NewCoupon {
    /// Force the discount type to [`PERCENTAGE_DISCOUNT`], whatever the caller asked for.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            discount_type: Some(PERCENTAGE_DISCOUNT.to_string()),
            ..self
        }
    }
}

/// Coupon Update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponUpdate {
    /// New code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// New discount type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// New discount value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<Decimal>,

    /// New minimum order amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase_amount: Option<Decimal>,

    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// New redemption model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<UsageType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_coupon(discount_type: Option<&str>) -> NewCoupon {
        NewCoupon {
            code: "BEMVINDO".to_string(),
            discount_type: discount_type.map(ToString::to_string),
            discount_value: Decimal::from(10),
            min_purchase_amount: None,
            status: "ACTIVE".to_string(),
            usage_type: UsageType::OneTime,
        }
    }

    #[test]
    fn normalized_overwrites_discount_type() {
        let coupon = new_coupon(Some("FIXED")).normalized();

        assert_eq!(coupon.discount_type.as_deref(), Some(PERCENTAGE_DISCOUNT));
    }

    #[test]
    fn normalized_fills_missing_discount_type() {
        let coupon = new_coupon(None).normalized();

        assert_eq!(coupon.discount_type.as_deref(), Some(PERCENTAGE_DISCOUNT));
    }
}
