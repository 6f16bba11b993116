//! Categories

use serde::{Deserialize, Serialize};

use crate::{
    ids::Id,
    validation::{Validate, ValidationError, require_id},
};

/// Category Id
pub type CategoryId = Id<Category>;

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// New Category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,
}

/// Category Update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for Category {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.id, "category.id")
    }
}
