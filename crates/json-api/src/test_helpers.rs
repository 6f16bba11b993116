//! Test helpers.

use std::sync::Arc;

use catalog_app::proxy::MockSubresourceProxy;
use salvo::{affix_state::inject, prelude::*};

use crate::{config::FallbackMode, state::State};

pub(crate) fn strict_proxy_mock() -> MockSubresourceProxy {
    let mut proxy = MockSubresourceProxy::new();

    proxy.expect_remove_deliverable().never();
    proxy.expect_remove_price().never();

    proxy
}

pub(crate) fn proxy_service(
    proxy: MockSubresourceProxy,
    fallback: FallbackMode,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(proxy), fallback))))
            .push(route),
    )
}
