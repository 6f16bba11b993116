//! Product sub-resource routes

use catalog::ids::Id;
use salvo::{http::header::AUTHORIZATION, prelude::Request};

pub(crate) mod handlers;
mod replies;

pub(crate) use handlers::*;

/// A non-blank identifier from the matched route.
fn path_id<T>(req: &Request, name: &str) -> Option<Id<T>> {
    req.param::<String>(name)
        .map(Id::new)
        .filter(|id| !id.is_blank())
}

/// The caller's `Authorization` header, forwarded verbatim.
fn authorization(req: &Request) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
