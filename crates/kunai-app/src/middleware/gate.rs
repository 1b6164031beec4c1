//! The request gate.
//!
//! ## Summary
//! Normalizes protocol headers, resolves the path against the store and
//! computes the caller's permissions before any method handler runs. The
//! resulting `RequestContext` is stored under `depot_keys::REQUEST_CONTEXT`.
//! Malformed requests end here with a plain-text 400.

use std::sync::Arc;

use percent_encoding::percent_decode_str;
use salvo::Depot;
use tracing::error;

use kunai_core::constants::DAV_ROUTE_PREFIX;
use kunai_rfc::rfc::dav::core::Href;
use kunai_service::request::{GateRequest, RawHeaders, RequestContext};
use kunai_service::response::DavResponse;

use super::depot::{depot_keys, get_caller_from_depot};
use crate::app::api::dav::respond::{set_header, write_response};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use crate::store_handler::get_store_from_depot;

pub struct GateMiddleware;

#[salvo::async_trait]
impl salvo::Handler for GateMiddleware {
    #[tracing::instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let request = gate_request(req);
        let path = request.path.clone();

        let ctx = match build_context(request, depot).await {
            Ok(ctx) => ctx,
            Err(e) => {
                let response = match &e {
                    AppError::ServiceError(service) => DavResponse::from(service),
                    _ => {
                        error!(error = ?e, "Gate is missing its dependencies");
                        DavResponse::text(500, "Internal Server Error")
                    }
                };
                let caller = get_caller_from_depot(depot).ok().map(|c| c.id);
                response.log_terminal(caller, &path);
                write_response(res, &response);
                ctrl.skip_rest();
                return;
            }
        };

        if let Some(location) = &ctx.content_location {
            set_header(res, "Content-Location", Href::for_dav_path(location).as_str());
        }

        depot.insert(depot_keys::REQUEST_CONTEXT, Arc::new(ctx));
    }
}

/// ## Summary
/// The request path below `/dav`, percent-decoded so that encoded illegal
/// characters are still rejected.
pub(crate) fn dav_path(req: &salvo::Request) -> String {
    let raw_path = req.uri().path();
    let below_root = raw_path.strip_prefix(DAV_ROUTE_PREFIX).unwrap_or(raw_path);
    percent_decode_str(below_root).decode_utf8_lossy().into_owned()
}

/// Collects the method, the path below `/dav` and the raw protocol headers.
fn gate_request(req: &salvo::Request) -> GateRequest {
    let path = dav_path(req);

    let headers = RawHeaders::from_lookup(|name| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    });

    GateRequest {
        method: req.method().as_str().to_string(),
        path,
        headers,
    }
}

async fn build_context(request: GateRequest, depot: &Depot) -> AppResult<RequestContext> {
    let config = get_config_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let caller = get_caller_from_depot(depot)?.clone();

    Ok(RequestContext::build(store.as_ref(), request, caller, &config.dav).await?)
}
