//! Depot keys and accessors for per-request gate state.

use std::sync::Arc;

use kunai_core::error::CoreError;
use kunai_service::request::{CallerIdentity, RequestContext};

use crate::error::AppResult;

pub mod depot_keys {
    pub const CALLER: &str = "__caller";
    pub const REQUEST_CONTEXT: &str = "__request_context";
}

/// ## Summary
/// Returns the authenticated caller.
///
/// ## Errors
/// Returns an invariant violation when the caller middleware has not run.
pub fn get_caller_from_depot(depot: &salvo::Depot) -> AppResult<&CallerIdentity> {
    depot
        .get::<CallerIdentity>(depot_keys::CALLER)
        .map_err(|_e| CoreError::InvariantViolation("Caller not found in depot").into())
}

/// ## Summary
/// Returns the request context built by the gate.
///
/// ## Errors
/// Returns an invariant violation when the gate middleware has not run.
pub fn get_context_from_depot(depot: &salvo::Depot) -> AppResult<Arc<RequestContext>> {
    depot
        .get::<Arc<RequestContext>>(depot_keys::REQUEST_CONTEXT)
        .cloned()
        .map_err(|_e| CoreError::InvariantViolation("Request context not found in depot").into())
}
