//! Pricing a decoded product against decoded modifier types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::json;
use testresult::TestResult;

use catalog::prelude::*;

fn product_json() -> serde_json::Value {
    json!({
        "id": "prod-1",
        "name": "Mentoria Rust",
        "description": "Acompanhamento individual",
        "paymentType": "RECURRING",
        "status": "ACTIVE",
        "singleItemOnly": true,
        "categoryId": "cat-1",
        "prices": [
            { "id": "price-1", "amount": 100, "currencyId": "usd", "modifierTypeId": null },
            { "id": "price-2", "amount": 100, "currencyId": "usd", "modifierTypeId": "anual" },
            { "id": "price-3", "amount": 100, "currencyId": "usd", "modifierTypeId": "setup" },
            { "id": "price-4", "amount": 100, "currencyId": "usd", "modifierTypeId": "legacy" }
        ],
        "deliverables": [],
        "guidelines": [],
        "createdBy": "system",
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-02T00:00:00Z"
    })
}

fn modifiers_json() -> serde_json::Value {
    json!([
        {
            "key": "anual",
            "displayName": "Anual",
            "description": "",
            "createdBy": "system",
            "priceAdjustment": { "type": "MULTIPLIER", "value": 1.5 },
            "valueRestrictions": { "maxValues": 1 }
        },
        {
            "key": "setup",
            "displayName": "Taxa de setup",
            "description": "",
            "createdBy": "system",
            "priceAdjustment": { "type": "FIXED_AMOUNT", "value": 10 },
            "valueRestrictions": null
        },
        {
            "key": "legacy",
            "displayName": "Legado",
            "description": "",
            "createdBy": "system",
            "priceAdjustment": { "type": "PERCENT_OFF", "value": 20 }
        }
    ])
}

fn with_field(
    mut value: serde_json::Value,
    field: &str,
    replacement: serde_json::Value,
) -> serde_json::Value {
    if let Some(object) = value.as_object_mut() {
        object.insert(field.to_string(), replacement);
    }

    value
}

#[test]
fn decoded_product_prices_adjust_per_modifier() -> TestResult {
    let product: Product = serde_json::from_value(product_json())?;
    let modifiers: Vec<ModifierType> = serde_json::from_value(modifiers_json())?;

    product.validate()?;
    modifiers.validate()?;

    assert_eq!(product.product_type, ProductType::Recurring);

    let by_key: HashMap<&ModifierTypeKey, &ModifierType> = modifiers
        .iter()
        .map(|modifier| (&modifier.key, modifier))
        .collect();

    let adjusted: Vec<Decimal> = product
        .prices
        .iter()
        .map(|price| {
            let modifier = price
                .modifier_type_id
                .as_ref()
                .and_then(|key| by_key.get(key).copied());

            calculate_adjusted_price(price.amount, modifier)
        })
        .collect();

    assert_eq!(
        adjusted,
        [
            Decimal::from(100),
            Decimal::from(150),
            Decimal::from(110),
            Decimal::from(100),
        ]
    );

    let rendered = adjusted
        .iter()
        .map(|amount| format_amount(*amount, "USD"))
        .collect::<Vec<_>>();

    assert!(
        rendered.iter().all(|amount| amount.starts_with('$')),
        "USD amounts should use the dollar sign: {rendered:?}"
    );

    Ok(())
}

#[test]
fn negative_price_fails_product_validation() -> TestResult {
    let raw = with_field(
        product_json(),
        "prices",
        json!([{ "amount": -1, "currencyId": "usd" }]),
    );

    let product: Product = serde_json::from_value(raw)?;

    assert_eq!(
        product.validate(),
        Err(ValidationError::Negative {
            field: "prices.amount"
        })
    );

    Ok(())
}

#[test]
fn product_with_blank_id_is_rejected() -> TestResult {
    let raw = with_field(product_json(), "id", json!(""));

    let product: Product = serde_json::from_value(raw)?;

    assert!(
        matches!(product.validate(), Err(ValidationError::Empty { .. })),
        "blank product id must be rejected"
    );

    Ok(())
}
