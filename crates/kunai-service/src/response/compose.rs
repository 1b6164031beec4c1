//! Protocol-mandated failure bodies.

use kunai_core::util::path::{PathRelation, relation};
use kunai_rfc::rfc::dav::build::{serialize_multistatus, serialize_unsupported_properties};
use kunai_rfc::rfc::dav::core::{
    Href, Multistatus, Propstat, PropstatResponse, QName, Status, dav_props,
};
use kunai_rfc::error::RfcError;

use super::{DavResponse, Outcome};
use crate::auth::supported_privilege_set_xml;
use crate::error::ServiceResult;

/// ## Summary
/// Builds the 207 answer for a request blocked by a lock.
///
/// The locked resource gets a `423 Locked` response. When the request path is
/// a different node, it gets a `424 Failed Dependency` propstat carrying an
/// empty `DAV:lockdiscovery`.
///
/// ## Errors
/// Returns an error if the XML body cannot be written.
pub fn lock_failure(lock_dav_name: &str, request_path: &str) -> ServiceResult<DavResponse> {
    let mut multistatus = Multistatus::new();
    multistatus.add_response(PropstatResponse::with_status(
        Href::for_dav_path(lock_dav_name),
        Status::Locked,
    ));

    if relation(lock_dav_name, request_path) != Some(PathRelation::Same) {
        let mut dependent = PropstatResponse::new(Href::for_dav_path(request_path));
        dependent.add_propstat(Propstat::new(
            Status::FailedDependency,
            vec![dav_props::lockdiscovery()],
        ));
        multistatus.add_response(dependent);
    }

    let body = serialize_multistatus(&multistatus).map_err(RfcError::from)?;
    Ok(DavResponse::xml(207, body))
}

/// ## Summary
/// Builds the 207 answer carrying `DAV:supported-privilege-set` for `path`.
///
/// ## Errors
/// Returns an error if the XML body cannot be written.
pub fn supported_privileges(path: &str) -> ServiceResult<DavResponse> {
    let mut response = PropstatResponse::new(Href::for_dav_path(path));
    response.add_propstat(
        Propstat::new(Status::Ok, vec![]).with_value(supported_privilege_set_xml()),
    );

    let mut multistatus = Multistatus::new();
    multistatus.add_response(response);

    let body = serialize_multistatus(&multistatus).map_err(RfcError::from)?;
    Ok(DavResponse::xml(207, body))
}

/// ## Summary
/// Answers 422 when the request names properties the server cannot handle.
///
/// An empty list means nothing is unsupported and the request continues.
///
/// ## Errors
/// Returns an error if the XML body cannot be written.
pub fn unsupported_request(unsupported: &[QName]) -> ServiceResult<Outcome<()>> {
    if unsupported.is_empty() {
        return Ok(Outcome::Continue(()));
    }

    tracing::debug!(count = unsupported.len(), "Unsupported properties in request");
    let body = serialize_unsupported_properties(unsupported).map_err(RfcError::from)?;
    Ok(Outcome::Terminate(DavResponse::xml(422, body)))
}
