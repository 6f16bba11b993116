//! Validation
//!
//! Records decoded from the catalog service are checked before they are
//! handed to callers. Structural problems (missing fields, wrong types) are
//! caught by serde; the checks here cover values serde cannot reject.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ids::Id;

/// A record failed a value check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identifier or key was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Path of the offending field.
        field: &'static str,
    },

    /// A monetary value was negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Path of the offending field.
        field: &'static str,
    },
}

/// Value checks applied to decoded records.
pub trait Validate {
    /// Check the record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_slice().validate()
    }
}

pub(crate) fn require_id<T>(id: &Id<T>, field: &'static str) -> Result<(), ValidationError> {
    if id.is_blank() {
        return Err(ValidationError::Empty { field });
    }

    Ok(())
}

pub(crate) fn require_non_negative(
    value: Decimal,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative { field });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing;

    #[test]
    fn blank_id_is_rejected() {
        let result = require_id(&Id::<Thing>::new(" "), "thing.id");

        assert_eq!(result, Err(ValidationError::Empty { field: "thing.id" }));
    }

    #[test]
    fn negative_zero_is_accepted() {
        let result = require_non_negative(Decimal::NEGATIVE_ONE * Decimal::ZERO, "amount");

        assert!(result.is_ok(), "negative zero is not a negative amount");
    }

    #[test]
    fn negative_amount_is_rejected() {
        let result = require_non_negative(Decimal::NEGATIVE_ONE, "amount");

        assert_eq!(result, Err(ValidationError::Negative { field: "amount" }));
    }
}
