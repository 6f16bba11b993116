//! Guidelines

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    ids::Id,
    products::ProductId,
    validation::{Validate, ValidationError, require_id},
};

/// Guideline Id
pub type GuidelineId = Id<Guideline>;

/// Usage or fulfilment guidance attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guideline {
    /// Guideline identifier.
    pub id: GuidelineId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Owning product.
    pub product_id: ProductId,

    /// Creation time.
    pub created_at: Timestamp,

    /// Last modification time.
    pub updated_at: Timestamp,
}

/// New Guideline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuideline {
    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Product to attach the guideline to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
}

/// Guideline Update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
}

impl Validate for Guideline {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.id, "guidelines.id")
    }
}
