//! Catalog service client, notification context and sub-resource forwarder.

pub mod client;
pub mod context;
pub mod domain;
pub mod notifications;
pub mod proxy;
