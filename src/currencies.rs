//! Currencies

use serde::{Deserialize, Serialize};

use crate::{
    ids::Id,
    validation::{Validate, ValidationError, require_id},
};

/// Currency Id
pub type CurrencyId = Id<Currency>;

/// A currency prices can be expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Currency identifier.
    pub id: CurrencyId,

    /// ISO 4217 code, e.g. `BRL`.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Display symbol, e.g. `R$`.
    pub symbol: String,
}

/// New Currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    /// ISO 4217 code.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Display symbol.
    pub symbol: String,
}

/// Currency Update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyUpdate {
    /// New ISO 4217 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New display symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Validate for Currency {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(&self.id, "currency.id")
    }
}
