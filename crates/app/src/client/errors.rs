//! Catalog client errors.

use catalog::validation::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by a single call to the catalog service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The catalog answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    Status {
        /// Upstream status code.
        status: StatusCode,

        /// Upstream body text, or a placeholder when it could not be read.
        body: String,
    },

    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// An identifier cannot be addressed as a single path segment.
    #[error("invalid identifier {id:?}")]
    Identifier {
        /// The rejected identifier.
        id: String,
    },

    /// The response decoded but failed value checks.
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

/// A failed catalog operation, with a message naming what was attempted.
#[derive(Debug, Error)]
#[error("{message}: {source}")]
pub struct CatalogError {
    message: String,

    #[source]
    source: ApiError,
}

impl CatalogError {
    /// Wrap `source` with a contextual message.
    pub fn new(message: impl Into<String>, source: ApiError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// What was being attempted, e.g. `Failed to fetch products`.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure.
    #[must_use]
    pub fn api_error(&self) -> &ApiError {
        &self.source
    }

    /// Upstream status code, when the catalog answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match &self.source {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(source) => source.status(),
            ApiError::Decode(_) | ApiError::Identifier { .. } | ApiError::Invalid(_) => None,
        }
    }

    /// Whether the catalog reported the record as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether the catalog could not be reached at all.
    #[must_use]
    pub fn is_network_error(&self) -> bool {
        matches!(
            &self.source,
            ApiError::Http(source)
                if source.is_connect() || source.is_timeout() || source.is_request()
        )
    }
}

/// Attach operation context to client results.
pub(crate) trait ContextExt<T> {
    fn context<F>(self, message: F) -> Result<T, CatalogError>
    where
        F: FnOnce() -> String;
}

impl<T> ContextExt<T> for Result<T, ApiError> {
    fn context<F>(self, message: F) -> Result<T, CatalogError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| {
            let error = CatalogError::new(message(), source);

            tracing::error!("API Error: {error}");

            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> CatalogError {
        CatalogError::new(
            "Failed to fetch product with ID p-1",
            ApiError::Status {
                status: StatusCode::NOT_FOUND,
                body: "missing".to_string(),
            },
        )
    }

    #[test]
    fn message_includes_context_and_cause() {
        assert_eq!(
            not_found().to_string(),
            "Failed to fetch product with ID p-1: HTTP error 404 Not Found: missing"
        );
    }

    #[test]
    fn exposes_upstream_status() {
        let error = not_found();

        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert!(error.is_not_found(), "404 should be reported as not found");
        assert!(!error.is_network_error(), "404 is not a network error");
    }

    #[test]
    fn validation_failures_have_no_status() {
        let error = CatalogError::new(
            "Failed to fetch products",
            ApiError::Invalid(ValidationError::Empty {
                field: "product.id",
            }),
        );

        assert_eq!(error.status(), None);
        assert!(
            error.to_string().contains("product.id must not be empty"),
            "message should name the field: {error}"
        );
    }
}
