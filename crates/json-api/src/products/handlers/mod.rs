//! Product Sub-resource Handlers

pub(crate) mod deliverables;
pub(crate) mod prices;
