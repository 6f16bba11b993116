//! Forwarder for product sub-resource deletions.
//!
//! Unlike the resource clients, the forwarder relays whatever the catalog
//! answers: upstream failures are data here, not errors.

use async_trait::async_trait;
use catalog::{deliverables::DeliverableId, prices::PriceId, products::ProductId};
use mockall::automock;
use reqwest::{Method, header::AUTHORIZATION};
use serde_json::{Value, json};

use crate::client::{ApiError, CatalogClient, path_segment};

/// Placeholder used when an upstream error body cannot be read.
pub const UNREADABLE_UPSTREAM_BODY: &str = "Erro desconhecido";

/// What the catalog answered to a forwarded request.
#[derive(Debug, Clone, PartialEq)]
pub enum Forwarded {
    /// 2xx with a JSON body.
    Success {
        /// Upstream status code.
        status: u16,

        /// Decoded upstream body, relayed as-is.
        body: Value,
    },

    /// Any non-2xx reply.
    Failure {
        /// Upstream status code.
        status: u16,

        /// Upstream body text.
        details: String,
    },
}

/// Relays product sub-resource deletions to the catalog.
#[automock]
#[async_trait]
pub trait SubresourceProxy: Send + Sync {
    /// Forward removal of a deliverable from a product.
    async fn remove_deliverable(
        &self,
        product: &ProductId,
        deliverable: &DeliverableId,
        authorization: Option<String>,
    ) -> Result<Forwarded, ApiError>;

    /// Forward removal of a price from a product.
    async fn remove_price(
        &self,
        product: &ProductId,
        price: &PriceId,
        authorization: Option<String>,
    ) -> Result<Forwarded, ApiError>;
}

/// Forwards sub-resource deletions to the catalog over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSubresourceProxy {
    client: CatalogClient,
}

impl HttpSubresourceProxy {
    /// Create a forwarder sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    async fn forward(
        &self,
        endpoint: &str,
        body: &Value,
        authorization: Option<String>,
    ) -> Result<Forwarded, ApiError> {
        let mut builder = self.client.raw_request(Method::DELETE, endpoint).json(body);

        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let details = response
                .text()
                .await
                .unwrap_or_else(|_error| UNREADABLE_UPSTREAM_BODY.to_string());

            return Ok(Forwarded::Failure {
                status: status.as_u16(),
                details,
            });
        }

        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).map_err(ApiError::Decode)?;

        Ok(Forwarded::Success {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SubresourceProxy for HttpSubresourceProxy {
    async fn remove_deliverable(
        &self,
        product: &ProductId,
        deliverable: &DeliverableId,
        authorization: Option<String>,
    ) -> Result<Forwarded, ApiError> {
        let body = json!({
            "productId": product,
            "deliverableId": deliverable,
        });

        let endpoint = format!(
            "/products/{}/deliverables/{}",
            path_segment(product.as_str())?,
            path_segment(deliverable.as_str())?
        );

        self.forward(&endpoint, &body, authorization).await
    }

    async fn remove_price(
        &self,
        product: &ProductId,
        price: &PriceId,
        authorization: Option<String>,
    ) -> Result<Forwarded, ApiError> {
        let endpoint = format!(
            "/products/{}/prices/{}",
            path_segment(product.as_str())?,
            path_segment(price.as_str())?
        );

        self.forward(&endpoint, &json!({}), authorization).await
    }
}
