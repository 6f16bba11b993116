//! Proxy replies

use catalog::{
    categories::CategoryId,
    products::{Product, ProductId, ProductStatus, ProductType},
};
use catalog_app::{client::ApiError, proxy::Forwarded};
use jiff::Timestamp;
use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::{Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::config::FallbackMode;

/// Response header marking a synthetic reply.
pub(crate) const FALLBACK_HEADER: &str = "x-catalog-fallback";

pub(crate) const MISSING_PRODUCT_ID: &str = "id é obrigatório";
pub(crate) const MISSING_DELIVERABLE_ID: &str = "deliverableId é obrigatório";
pub(crate) const MISSING_PRICE_ID: &str = "priceId é obrigatório";

pub(crate) const INVALID_ID: &str = "Identificador inválido";

const UNREACHABLE: &str = "Falha ao contatar a API externa";

/// JSON error body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct ErrorReply {
    pub(crate) error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) details: Option<String>,
}

pub(crate) fn missing(res: &mut Response, message: &str) {
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorReply {
        error: message.to_string(),
        details: None,
    }));
}

/// Relay the catalog's answer, or apply `fallback` when there was none.
pub(crate) fn forwarded(
    res: &mut Response,
    outcome: Result<Forwarded, ApiError>,
    fallback: FallbackMode,
) {
    match outcome {
        Ok(Forwarded::Success { status, body }) => {
            res.status_code(status_code(status));
            res.render(Json(body));
        }
        Ok(Forwarded::Failure { status, details }) => {
            warn!(status, %details, "catalog rejected forwarded request");

            res.status_code(status_code(status));
            res.render(Json(ErrorReply {
                error: format!("Erro na API externa: {status}"),
                details: Some(details),
            }));
        }
        Err(ApiError::Identifier { id }) => {
            warn!(%id, "refusing to forward unaddressable identifier");

            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorReply {
                error: INVALID_ID.to_string(),
                details: Some(id),
            }));
        }
        Err(source) => unreachable(res, &source, fallback),
    }
}

fn unreachable(res: &mut Response, source: &ApiError, fallback: FallbackMode) {
    match fallback {
        FallbackMode::Strict => {
            error!("failed to contact catalog: {source}");

            res.status_code(StatusCode::BAD_GATEWAY);
            res.render(Json(ErrorReply {
                error: UNREACHABLE.to_string(),
                details: Some(source.to_string()),
            }));
        }
        FallbackMode::Synthetic => {
            warn!("failed to contact catalog, serving synthetic product: {source}");

            res.headers_mut()
                .insert(FALLBACK_HEADER, HeaderValue::from_static("synthetic"));
            res.status_code(StatusCode::OK);
            res.render(Json(synthetic_product()));
        }
    }
}

fn synthetic_product() -> Product {
    let now = Timestamp::now();

    Product {
        id: ProductId::new("prod-mock"),
        name: "Produto Atualizado".to_string(),
        description: "Descrição do produto".to_string(),
        product_type: ProductType::OneTime,
        status: ProductStatus::Active,
        single_item_only: false,
        category_id: CategoryId::new("cat-1"),
        prices: Vec::new(),
        deliverables: Vec::new(),
        guidelines: Vec::new(),
        created_by: "system".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}
