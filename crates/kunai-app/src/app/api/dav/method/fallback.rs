//! Handler for every method without a dedicated implementation.
//!
//! Runs the checks a real method handler would run first: the permission
//! check, the `If-Match`/`If-None-Match` preconditions and, for writes,
//! the lock check. A request that passes all of them gets 501, except a
//! principal PROPFIND for `DAV:supported-privilege-set`.

use salvo::{Depot, Request, Response, handler};
use tracing::error;

use kunai_rfc::rfc::dav::core::{DavMethod, Depth, dav_props};
use kunai_rfc::rfc::dav::parse::requested_properties;
use kunai_service::conditional::Precondition;
use kunai_service::error::ServiceError;
use kunai_service::request::RequestContext;
use kunai_service::response::{DavResponse, Outcome, supported_privileges};

use crate::app::api::dav::respond::write_response;
use crate::error::{AppError, AppResult};
use crate::middleware::depot::get_context_from_depot;
use crate::store_handler::get_store_from_depot;

#[handler]
#[tracing::instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
pub async fn fallback(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body = match req.payload().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read request body");
            Vec::new()
        }
    };

    let response = match check(depot, &body).await {
        Ok(response) => response,
        Err(AppError::ServiceError(e)) if e.is_client_error() => DavResponse::from(&e),
        Err(e) => {
            error!(error = ?e, "Request checks failed");
            match &e {
                AppError::ServiceError(service) => DavResponse::from(service),
                _ => DavResponse::text(500, "Internal Server Error"),
            }
        }
    };

    let context = get_context_from_depot(depot).ok();
    response.log_terminal(
        context.as_ref().map(|ctx| ctx.caller.id),
        context.as_ref().map_or(req.uri().path(), |ctx| ctx.path.as_str()),
    );
    write_response(res, &response);
}

async fn check(depot: &Depot, body: &[u8]) -> AppResult<DavResponse> {
    let ctx = get_context_from_depot(depot)?;

    if !ctx.allowed_for_method() {
        tracing::info!(permissions = %ctx.permissions, method = %ctx.method, "Permission denied");
        return Ok(DavResponse::text(403, "Forbidden"));
    }

    // No resource content behind the gate yet, so every resource is absent.
    match ctx.conditional().evaluate(None) {
        Precondition::PreconditionFailed => {
            return Ok(DavResponse::text(412, "Precondition Failed"));
        }
        Precondition::NotModified => return Ok(DavResponse::text(304, "")),
        Precondition::Proceed => {}
    }

    if asks_for_supported_privileges(&ctx, body)? {
        return Ok(supported_privileges(&ctx.path)?);
    }

    if ctx.method.is_write() {
        let store = get_store_from_depot(depot)?;
        let mut locks = ctx.lock_manager(store);
        if let Outcome::Terminate(response) = locks.fail_if_locked().await? {
            return Ok(response);
        }
    }

    Ok(DavResponse::text(
        501,
        format!("{} is not implemented", ctx.method),
    ))
}

/// A depth-0 PROPFIND on a principal that names `DAV:supported-privilege-set`.
fn asks_for_supported_privileges(ctx: &RequestContext, body: &[u8]) -> AppResult<bool> {
    if ctx.method != DavMethod::Propfind || !ctx.is_principal || ctx.depth != Depth::Zero {
        return Ok(false);
    }

    let requested = requested_properties(body).map_err(ServiceError::from)?;
    Ok(requested.contains(&dav_props::supported_privilege_set()))
}
