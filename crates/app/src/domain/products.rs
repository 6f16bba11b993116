//! Product sub-resources.

use catalog::{
    deliverables::DeliverableId,
    guidelines::GuidelineId,
    prices::PriceId,
    products::{Product, ProductId},
};

use crate::{
    client::{ApiError, CatalogError, ContextExt as _, path_segment},
    domain::{Products, ResourceClient, resource::validated},
};

impl ResourceClient<Products> {
    /// Detach a deliverable from a product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the catalog rejects or cannot be reached.
    pub async fn delete_deliverable(
        &self,
        product: &ProductId,
        deliverable: &DeliverableId,
    ) -> Result<(), CatalogError> {
        let context =
            || format!("Failed to delete deliverable {deliverable} from product {product}");
        let path = nested_path(product, "deliverables", deliverable.as_str()).context(context)?;

        self.client().delete_empty(&path).await.context(context)
    }

    /// Detach a guideline from a product, returning the updated product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the catalog rejects, cannot be reached
    /// or returns an invalid product.
    pub async fn delete_guideline(
        &self,
        product: &ProductId,
        guideline: &GuidelineId,
    ) -> Result<Product, CatalogError> {
        let context = || format!("Failed to delete guideline {guideline} from product {product}");
        let path = nested_path(product, "guidelines", guideline.as_str()).context(context)?;

        self.client()
            .delete::<Product>(&path)
            .await
            .and_then(validated)
            .context(context)
    }

    /// Remove a price from a product, returning the updated product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the catalog rejects, cannot be reached
    /// or returns an invalid product.
    pub async fn delete_price(
        &self,
        product: &ProductId,
        price: &PriceId,
    ) -> Result<Product, CatalogError> {
        let context = || format!("Failed to delete price {price} from product {product}");
        let path = nested_path(product, "prices", price.as_str()).context(context)?;

        self.client()
            .delete::<Product>(&path)
            .await
            .and_then(validated)
            .context(context)
    }
}

fn nested_path(product: &ProductId, collection: &str, child: &str) -> Result<String, ApiError> {
    Ok(format!(
        "{}/{collection}/{}",
        ResourceClient::<Products>::item_path(product)?,
        path_segment(child)?
    ))
}

#[cfg(test)]
mod tests {
    use mockito::{Server, ServerGuard};
    use serde_json::json;
    use testresult::TestResult;

    use crate::client::{CatalogClient, ClientConfig};

    use super::*;

    fn products(server: &ServerGuard) -> ResourceClient<Products> {
        ResourceClient::new(CatalogClient::new(ClientConfig {
            base_url: server.url(),
            authorization: None,
        }))
    }

    fn product_body(guidelines: serde_json::Value) -> String {
        json!({
            "id": "prod-1",
            "name": "Curso",
            "description": "",
            "productType": "ONE_TIME",
            "status": "ACTIVE",
            "singleItemOnly": false,
            "categoryId": "cat-1",
            "prices": [],
            "deliverables": [],
            "guidelines": guidelines,
            "createdBy": "system",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        })
        .to_string()
    }

    #[tokio::test]
    async fn delete_deliverable_targets_nested_path() -> TestResult {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("DELETE", "/products/prod-1/deliverables/del-1")
            .with_status(204)
            .create_async()
            .await;

        products(&server)
            .delete_deliverable(&ProductId::new("prod-1"), &DeliverableId::new("del-1"))
            .await?;

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn delete_guideline_returns_updated_product() -> TestResult {
        let mut server = Server::new_async().await;

        server
            .mock("DELETE", "/products/prod-1/guidelines/gl-1")
            .with_status(200)
            .with_body(product_body(json!([])))
            .create_async()
            .await;

        let product = products(&server)
            .delete_guideline(&ProductId::new("prod-1"), &GuidelineId::new("gl-1"))
            .await?;

        assert!(product.guidelines.is_empty(), "guideline should be gone");

        Ok(())
    }

    #[tokio::test]
    async fn delete_price_keeps_traversal_inside_product() -> TestResult {
        let mut server = Server::new_async().await;

        let nested = server
            .mock("DELETE", "/products/prod-1/prices/..%2F..%2Fcategories%2Fcat-1")
            .with_status(200)
            .with_body(product_body(json!([])))
            .create_async()
            .await;

        let category = server
            .mock("DELETE", "/categories/cat-1")
            .expect(0)
            .create_async()
            .await;

        products(&server)
            .delete_price(&ProductId::new("prod-1"), &PriceId::new("../../categories/cat-1"))
            .await?;

        nested.assert_async().await;
        category.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn delete_deliverable_failure_names_both_ids() -> TestResult {
        let mut server = Server::new_async().await;

        server
            .mock("DELETE", "/products/prod-1/deliverables/del-1")
            .with_status(404)
            .create_async()
            .await;

        let result = products(&server)
            .delete_deliverable(&ProductId::new("prod-1"), &DeliverableId::new("del-1"))
            .await;

        assert!(
            result.as_ref().is_err_and(|e| {
                e.message() == "Failed to delete deliverable del-1 from product prod-1"
                    && e.is_not_found()
            }),
            "unexpected result: {result:?}"
        );

        Ok(())
    }
}
