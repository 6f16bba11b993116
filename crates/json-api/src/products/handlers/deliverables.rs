//! Remove Product Deliverable Handler

use std::sync::Arc;

use catalog::{deliverables::DeliverableId, products::ProductId};
use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{
        authorization, path_id,
        replies::{self, MISSING_DELIVERABLE_ID, MISSING_PRODUCT_ID},
    },
    state::State,
};

/// Remove Product Deliverable Handler
///
/// Forwards `DELETE /products/{id}/deliverables/{deliverable}` to the catalog
/// with a body naming both identifiers.
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

    let Some(deliverable): Option<DeliverableId> = path_id(req, "deliverable") else {
        replies::missing(res, MISSING_DELIVERABLE_ID);

        return Ok(());
    };

    let outcome = state
        .proxy
        .remove_deliverable(&product, &deliverable, authorization(req))
        .await;

    replies::forwarded(res, outcome, state.fallback);

    Ok(())
}
