//! Remove Product Price Handler

use std::sync::Arc;

use catalog::{prices::PriceId, products::ProductId};
use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{
        authorization, path_id,
        replies::{self, MISSING_PRICE_ID, MISSING_PRODUCT_ID},
    },
    state::State,
};

/// Remove Product Price Handler
///
/// Forwards `DELETE /products/{id}/prices/{price}` to the catalog with an
/// empty JSON body.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(product): Option<ProductId> = path_id(req, "id") else {
        replies::missing(res, MISSING_PRODUCT_ID);

        return Ok(());
    };

    let Some(price): Option<PriceId> = path_id(req, "price") else {
        replies::missing(res, MISSING_PRICE_ID);

        return Ok(());
    };

    let outcome = state
        .proxy
        .remove_price(&product, &price, authorization(req))
        .await;

    replies::forwarded(res, outcome, state.fallback);

    Ok(())
}

#[cfg(test)]
mod tests {
    use catalog_app::proxy::{Forwarded, MockSubresourceProxy};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use crate::{
        config::FallbackMode,
        products::replies::{ErrorReply, FALLBACK_HEADER},
        test_helpers::{proxy_service, strict_proxy_mock},
    };

    use super::{super::tests::*, *};

    fn make_service(proxy: MockSubresourceProxy, fallback: FallbackMode) -> Service {
        proxy_service(
            proxy,
            fallback,
            Router::with_path("products/{id}/prices/{price}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_price_relays_upstream_status_and_body() -> TestResult {
        let mut proxy = MockSubresourceProxy::new();

        proxy.expect_remove_deliverable().never();
        proxy
            .expect_remove_price()
            .once()
            .withf(|product, price, authorization| {
                product.as_str() == "prod-1"
                    && price.as_str() == "price-1"
                    && authorization.as_deref() == Some(AUTHORIZATION_VALUE)
            })
            .return_once(|_, _, _| {
                Ok(Forwarded::Success {
                    status: 202,
                    body: updated_product(),
                })
            });

        let mut res = TestClient::delete("http://example.com/products/prod-1/prices/price-1")
            .add_header("authorization", AUTHORIZATION_VALUE, true)
            .send(&make_service(proxy, FallbackMode::Strict))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::ACCEPTED));

        let body: Value = res.take_json().await?;

        assert_eq!(body, updated_product());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_price_blank_price_id_returns_400() -> TestResult {
        let mut res = TestClient::delete("http://example.com/products/prod-1/prices/%20%20")
            .send(&make_service(strict_proxy_mock(), FallbackMode::Strict))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorReply = res.take_json().await?;

        assert_eq!(body.error, "priceId é obrigatório");
        assert_eq!(body.details, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_price_blank_product_id_returns_400() -> TestResult {
        let mut res = TestClient::delete("http://example.com/products/%20/prices/price-1")
            .send(&make_service(strict_proxy_mock(), FallbackMode::Strict))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorReply = res.take_json().await?;

        assert_eq!(body.error, "id é obrigatório");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_price_relays_unreadable_upstream_failure() -> TestResult {
        let mut proxy = MockSubresourceProxy::new();

        proxy.expect_remove_price().once().return_once(|_, _, _| {
            Ok(Forwarded::Failure {
                status: 500,
                details: "Erro desconhecido".to_string(),
            })
        });

        let mut res = TestClient::delete("http://example.com/products/prod-1/prices/price-1")
            .send(&make_service(proxy, FallbackMode::Strict))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorReply = res.take_json().await?;

        assert_eq!(body.error, "Erro na API externa: 500");
        assert_eq!(body.details.as_deref(), Some("Erro desconhecido"));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_price_failed_catalog_call_returns_502() -> TestResult {
        let mut proxy = MockSubresourceProxy::new();

        proxy
            .expect_remove_price()
            .once()
            .return_once(|_, _, _| Err(decode_failure()));

        let res = TestClient::delete("http://example.com/products/prod-1/prices/price-1")
            .send(&make_service(proxy, FallbackMode::Strict))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_price_synthetic_fallback_serves_placeholder() -> TestResult {
        let mut proxy = MockSubresourceProxy::new();

        proxy
            .expect_remove_price()
            .once()
            .return_once(|_, _, _| Err(decode_failure()));

        let mut res = TestClient::delete("http://example.com/products/prod-1/prices/price-1")
            .send(&make_service(proxy, FallbackMode::Synthetic))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            res.headers().contains_key(FALLBACK_HEADER),
            "synthetic reply must be flagged"
        );

        let body: Value = res.take_json().await?;

        assert_eq!(
            body.get("prices").and_then(Value::as_array).map(Vec::len),
            Some(0)
        );

        Ok(())
    }
}
