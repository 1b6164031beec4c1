use salvo::Router;

use crate::middleware::{caller::CallerMiddleware, gate::GateMiddleware};

pub mod dav;

pub use kunai_core::constants::{DAV_ROUTE_COMPONENT, DAV_ROUTE_PREFIX};

/// ## Summary
/// Constructs the DAV router.
///
/// Every request below `/dav` passes the caller middleware and then the
/// gate before reaching a method handler.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(DAV_ROUTE_COMPONENT)
        .hoop(CallerMiddleware)
        .hoop(GateMiddleware)
        .push(dav::routes())
}
