//! Catalog prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    categories::{Category, CategoryId, CategoryUpdate, NewCategory},
    coupons::{Coupon, CouponId, CouponUpdate, NewCoupon, PERCENTAGE_DISCOUNT, UsageType},
    currencies::{Currency, CurrencyId, CurrencyUpdate, NewCurrency},
    deliverables::{Deliverable, DeliverableId, DeliverableUpdate, NewDeliverable},
    guidelines::{Guideline, GuidelineId, GuidelineUpdate, NewGuideline},
    ids::Id,
    modifiers::{
        AdjustmentKind, ModifierType, ModifierTypeKey, ModifierTypeUpdate, NewModifierType,
        PriceAdjustment, ValueRestrictions,
    },
    prices::{Price, PriceId},
    pricing::{calculate_adjusted_price, format_amount},
    products::{NewProduct, Product, ProductId, ProductStatus, ProductType, ProductUpdate},
    validation::{Validate, ValidationError},
};
