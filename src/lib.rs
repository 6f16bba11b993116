//! Catalog
//!
//! Records, identifiers and pricing rules for the product catalog backoffice.
//! The catalog service owns every record; these types describe them in
//! transit and check them on the way in.

pub mod categories;
pub mod coupons;
pub mod currencies;
pub mod deliverables;
pub mod guidelines;
pub mod ids;
pub mod modifiers;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod validation;
