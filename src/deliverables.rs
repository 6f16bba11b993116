//! Deliverables

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    ids::Id,
    products::ProductId,
    validation::{Validate, ValidationError, require_id},
};

/// Deliverable Id
pub type DeliverableId = Id<Deliverable>;

/// Something a customer receives when buying a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    /// Deliverable identifier.
    pub id: DeliverableId,

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

/// New Deliverable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliverable {
    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Product to attach the deliverable to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
}

/// Deliverable Update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableUpdate {
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

impl Validate for Deliverable {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.id, "deliverables.id")
    }
}
