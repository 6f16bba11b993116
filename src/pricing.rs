//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

use crate::modifiers::ModifierType;

/// Price after applying a product price's modifier, if it has one.
///
/// Without a modifier, or with a modifier that carries no adjustment rule,
/// the base amount is returned unchanged.
#[must_use]
pub fn calculate_adjusted_price(base: Decimal, modifier: Option<&ModifierType>) -> Decimal {
    modifier
        .and_then(|modifier| modifier.price_adjustment.as_ref())
        .map_or(base, |adjustment| adjustment.apply(base))
}

/// Render `amount` in the given ISO 4217 currency, e.g. `$10.00`.
///
/// Codes missing from the ISO table are rendered as `"{amount} {code}"`.
#[must_use]
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    match iso::find(currency_code) {
        Some(currency) => Money::from_decimal(amount, currency).to_string(),
        None => format!("{amount} {currency_code}"),
    }
}
