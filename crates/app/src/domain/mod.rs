//! Catalog resources.

use catalog::{
    categories::{Category, CategoryUpdate, NewCategory},
    coupons::{Coupon, CouponUpdate, NewCoupon},
    currencies::{Currency, CurrencyUpdate, NewCurrency},
    deliverables::{Deliverable, DeliverableUpdate, NewDeliverable},
    guidelines::{Guideline, GuidelineUpdate, NewGuideline},
    modifiers::{ModifierType, ModifierTypeUpdate, NewModifierType},
    products::{NewProduct, Product, ProductUpdate},
};

pub mod modifier_types;
pub mod products;
mod resource;

pub use modifier_types::{MockModifierLookup, ModifierLookup, get_adjusted_price};
pub use resource::{RecordId, Resource, ResourceClient};

/// `/guidelines`
#[derive(Debug, Clone, Copy)]
pub struct Guidelines;

impl Resource for Guidelines {
    type Record = Guideline;
    type New = NewGuideline;
    type Update = GuidelineUpdate;

    const PATH: &'static str = "/guidelines";
    const SINGULAR: &'static str = "guideline";
    const PLURAL: &'static str = "guidelines";
}

/// `/categories`
#[derive(Debug, Clone, Copy)]
pub struct Categories;

impl Resource for Categories {
    type Record = Category;
    type New = NewCategory;
    type Update = CategoryUpdate;

    const PATH: &'static str = "/categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
}

/// `/coupons`
///
/// New coupons are always created as percentage discounts.
#[derive(Debug, Clone, Copy)]
pub struct Coupons;

impl Resource for Coupons {
    type Record = Coupon;
    type New = NewCoupon;
    type Update = CouponUpdate;

    const PATH: &'static str = "/coupons";
    const SINGULAR: &'static str = "coupon";
    const PLURAL: &'static str = "coupons";

    fn prepare(new: NewCoupon) -> NewCoupon {
        new.normalized()
    }
}

/// `/currencies`
#[derive(Debug, Clone, Copy)]
pub struct Currencies;

impl Resource for Currencies {
    type Record = Currency;
    type New = NewCurrency;
    type Update = CurrencyUpdate;

    const PATH: &'static str = "/currencies";
    const SINGULAR: &'static str = "currency";
    const PLURAL: &'static str = "currencies";
}

/// `/deliverables`
#[derive(Debug, Clone, Copy)]
pub struct Deliverables;

impl Resource for Deliverables {
    type Record = Deliverable;
    type New = NewDeliverable;
    type Update = DeliverableUpdate;

    const PATH: &'static str = "/deliverables";
    const SINGULAR: &'static str = "deliverable";
    const PLURAL: &'static str = "deliverables";
}

/// `/products`
#[derive(Debug, Clone, Copy)]
pub struct Products;

impl Resource for Products {
    type Record = Product;
    type New = NewProduct;
    type Update = ProductUpdate;

    const PATH: &'static str = "/products";
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";
}

/// `/modifier-types`, keyed by modifier key rather than id.
#[derive(Debug, Clone, Copy)]
pub struct ModifierTypes;

impl Resource for ModifierTypes {
    type Record = ModifierType;
    type New = NewModifierType;
    type Update = ModifierTypeUpdate;

    const PATH: &'static str = "/modifier-types";
    const SINGULAR: &'static str = "modifier type";
    const PLURAL: &'static str = "modifier types";
    const ID_LABEL: &'static str = "key";
}
