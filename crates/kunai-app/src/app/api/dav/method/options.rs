//! OPTIONS method handler.

use salvo::{Depot, Request, Response, handler};

use kunai_service::response::DavResponse;

use crate::app::api::dav::respond::write_response;
use crate::middleware::depot::get_context_from_depot;

/// Compliance classes advertised in the `DAV` header.
pub const DAV_COMPLIANCE: &str = "1, 2, 3, access-control, calendar-access";

const COLLECTION_METHODS: &str =
    "OPTIONS, GET, HEAD, PROPFIND, PROPPATCH, REPORT, MKCOL, MKCALENDAR, DELETE, MOVE, COPY, LOCK, UNLOCK";
const ITEM_METHODS: &str =
    "OPTIONS, GET, HEAD, PUT, PROPFIND, PROPPATCH, DELETE, MOVE, COPY, LOCK, UNLOCK";

/// ## Summary
/// Handles OPTIONS requests.
///
/// `Allow` depends on whether the gate resolved a collection. OPTIONS needs
/// no permission.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn options(req: &mut Request, res: &mut Response, depot: &Depot) {
    let is_collection = get_context_from_depot(depot).is_ok_and(|ctx| ctx.is_collection);

    let allow = if is_collection {
        COLLECTION_METHODS
    } else {
        ITEM_METHODS
    };

    let response = DavResponse::text(200, "")
        .with_header("Allow", allow)
        .with_header("DAV", DAV_COMPLIANCE);
    write_response(res, &response);

    tracing::debug!(is_collection, "OPTIONS response sent");
}
