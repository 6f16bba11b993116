//! Products

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    categories::CategoryId,
    deliverables::Deliverable,
    guidelines::Guideline,
    ids::Id,
    prices::Price,
    validation::{Validate, ValidationError, require_id},
};

/// Product Id
pub type ProductId = Id<Product>;

/// How a product is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Charged once.
    OneTime,

    /// Charged on a schedule.
    Recurring,
}

/// Whether a product is on sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Available for sale.
    Active,

    /// Hidden from sale.
    Inactive,
}

impl ProductStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Catalog product, the aggregate root for prices, deliverables and guidelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Charging model. Older payloads call this `paymentType`.
    #[serde(alias = "paymentType")]
    pub product_type: ProductType,

    /// Sale status.
    pub status: ProductStatus,

    /// Whether only one unit may be bought per order.
    #[serde(default)]
    pub single_item_only: bool,

    /// Category the product belongs to.
    pub category_id: CategoryId,

    /// Prices, one per currency/modifier combination.
    #[serde(default)]
    pub prices: Vec<Price>,

    /// Attached deliverables.
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,

    /// Attached guidelines.
    #[serde(default)]
    pub guidelines: Vec<Guideline>,

    /// Author of the record.
    #[serde(default)]
    pub created_by: String,

    /// Creation time.
    pub created_at: Timestamp,

    /// Last modification time.
    pub updated_at: Timestamp,
}

impl Product {
    /// Case-insensitive match of `term` against the name and description.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();

        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.id, "product.id")?;
        self.prices.validate()?;
        self.deliverables.validate()?;
        self.guidelines.validate()
    }
}

/// New Product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Charging model.
    pub product_type: ProductType,

    /// Sale status.
    pub status: ProductStatus,

    /// Whether only one unit may be bought per order.
    pub single_item_only: bool,

    /// Category the product belongs to.
    pub category_id: CategoryId,

    /// Initial prices.
    pub prices: Vec<Price>,

    /// Initial deliverables.
    pub deliverables: Vec<Deliverable>,

    /// Initial guidelines.
    pub guidelines: Vec<Guideline>,

    /// Author of the record.
    pub created_by: String,
}

/// Product Update
///
/// Unset fields are left out of the request body so the catalog keeps their
/// current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New charging model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    /// New sale status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// New single item flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_item_only: Option<bool>,

    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Replacement price list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<Price>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn product_json() -> serde_json::Value {
        json!({
            "id": "prod-1",
            "name": "Mentoria",
            "description": "Sessões semanais",
            "productType": "RECURRING",
            "status": "ACTIVE",
            "singleItemOnly": true,
            "categoryId": "cat-1",
            "prices": [
                { "amount": 100, "currencyId": "cur-1", "modifierTypeId": null },
                { "amount": 49.9, "currencyId": "cur-2", "modifierTypeId": "promo" }
            ],
            "deliverables": [],
            "guidelines": [],
            "createdBy": "system",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-02T00:00:00Z"
        })
    }

    #[test]
    fn decodes_catalog_payload() -> TestResult {
        let product: Product = serde_json::from_value(product_json())?;

        assert_eq!(product.id.as_str(), "prod-1");
        assert_eq!(product.product_type, ProductType::Recurring);
        assert_eq!(product.prices.len(), 2);
        assert!(product.validate().is_ok(), "product should be valid");

        Ok(())
    }

    #[test]
    fn accepts_payment_type_alias() -> TestResult {
        let mut payload = product_json();

        if let Some(object) = payload.as_object_mut() {
            object.remove("productType");
            object.insert("paymentType".to_string(), json!("ONE_TIME"));
        }

        let product: Product = serde_json::from_value(payload)?;

        assert_eq!(product.product_type, ProductType::OneTime);

        Ok(())
    }

    #[test]
    fn empty_id_fails_validation() -> TestResult {
        let mut product: Product = serde_json::from_value(product_json())?;
        product.id = ProductId::new("");

        assert_eq!(
            product.validate(),
            Err(ValidationError::Empty {
                field: "product.id"
            })
        );

        Ok(())
    }

    #[test]
    fn update_omits_unset_fields() -> TestResult {
        let update = ProductUpdate {
            name: Some("Novo nome".to_string()),
            ..ProductUpdate::default()
        };

        assert_eq!(serde_json::to_value(&update)?, json!({ "name": "Novo nome" }));

        Ok(())
    }

    #[test]
    fn search_matches_name_or_description() -> TestResult {
        let product: Product = serde_json::from_value(product_json())?;

        assert!(product.matches("mentoria"), "name should match");
        assert!(product.matches("SEMANAIS"), "description should match");
        assert!(product.matches(""), "empty term matches everything");
        assert!(!product.matches("curso"), "unrelated term should not match");

        Ok(())
    }
}
