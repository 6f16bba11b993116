//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{healthcheck, observability::RequestLogging, products, state::State};

pub(crate) fn app_router(state: Arc<State>, logging: RequestLogging) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products/{id}")
                .push(
                    Router::with_path("deliverables/{deliverable}")
                        .delete(products::deliverables::handler),
                )
                .push(Router::with_path("prices/{price}").delete(products::prices::handler)),
        )
}
