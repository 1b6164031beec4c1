//! The per-request context shared by every handler.

use std::sync::Arc;

use kunai_core::config::DavConfig;
use kunai_db::store::DavStore;
use kunai_rfc::rfc::dav::core::{DavMethod, Depth};
use kunai_rfc::rfc::dav::headers::{IfHeader, TimeoutRequest, is_xml_content_type};

use super::headers::{NormalizedHeaders, RawHeaders};
use super::identity::{CallerIdentity, Identity};
use super::path::{self, ResolvedPath};
use crate::auth::{Activity, PermissionSet, resolve_permissions};
use crate::conditional::ConditionalRequest;
use crate::error::ServiceResult;
use crate::lock::LockManager;

/// What the transport hands to the gate.
#[derive(Debug, Clone)]
pub struct GateRequest {
    pub method: String,
    /// Path below the service root, as received.
    pub path: String,
    pub headers: RawHeaders,
}

/// Everything the gate learned about a request. Immutable once built.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub path: String,
    pub method: DavMethod,
    pub depth: Depth,
    pub destination: Option<String>,
    pub overwrite: bool,
    pub if_clause: Option<IfHeader>,
    pub lock_token: Option<String>,
    pub timeout_request: Option<TimeoutRequest>,
    pub etag_if_match: Option<String>,
    pub etag_if_none_match: Option<String>,
    pub caller: CallerIdentity,
    pub target: Option<Identity>,
    pub by_email: bool,
    pub is_collection: bool,
    pub is_principal: bool,
    pub content_location: Option<String>,
    pub content_type: Option<String>,
    pub permissions: PermissionSet,
}

impl RequestContext {
    /// ## Summary
    /// Builds the context for one request.
    ///
    /// The path is checked before anything else so that an illegal path is
    /// rejected without touching the store. Headers are normalized next, then
    /// the path is resolved and permissions are computed.
    ///
    /// ## Errors
    /// Returns `IllegalPath` or `InvalidHeader` for malformed input. Store
    /// failures never surface here; they degrade as described on `path::resolve`
    /// and `resolve_permissions`.
    #[tracing::instrument(skip(store, request, caller, dav), fields(method = %request.method, path = %request.path, caller = caller.id))]
    pub async fn build(
        store: &dyn DavStore,
        request: GateRequest,
        caller: CallerIdentity,
        dav: &DavConfig,
    ) -> ServiceResult<Self> {
        let sanitized = path::sanitize(&request.path)?;
        let method = DavMethod::parse(&request.method);
        let headers = NormalizedHeaders::normalize(&request.headers, &method, dav)?;

        let ResolvedPath {
            path,
            content_location,
            target,
            by_email,
            is_collection,
            is_principal,
        } = path::resolve(store, sanitized, &caller, dav.allow_by_email).await;

        let permissions = resolve_permissions(store, &path, &caller, target.as_ref()).await;

        tracing::debug!(%path, depth = %headers.depth, %permissions, "Request context built");

        Ok(Self {
            path,
            method,
            depth: headers.depth,
            destination: headers.destination,
            overwrite: headers.overwrite,
            if_clause: headers.if_header,
            lock_token: headers.lock_token,
            timeout_request: headers.timeout,
            etag_if_match: headers.etag_if_match,
            etag_if_none_match: headers.etag_if_none_match,
            caller,
            target,
            by_email,
            is_collection,
            is_principal,
            content_location,
            content_type: headers.content_type,
            permissions,
        })
    }

    /// Whether the caller may perform `activity` on this request's target.
    #[must_use]
    pub fn allowed_to(&self, activity: &Activity) -> bool {
        self.permissions.allowed_to(activity)
    }

    /// Whether the caller may perform what the request method implies.
    #[must_use]
    pub fn allowed_for_method(&self) -> bool {
        self.allowed_to(&Activity::for_method(&self.method))
    }

    /// `0`, `1` or `infinity`.
    #[must_use]
    pub const fn depth_name(&self) -> &'static str {
        self.depth.as_str()
    }

    /// Whether the body is declared as XML.
    #[must_use]
    pub fn has_xml_body(&self) -> bool {
        self.content_type.as_deref().is_some_and(is_xml_content_type)
    }

    /// Effective lock timeout in seconds, when a `Timeout` header was sent.
    #[must_use]
    pub fn timeout(&self) -> Option<u64> {
        self.timeout_request.as_ref().map(|t| t.effective)
    }

    /// A fresh lock manager for this request.
    #[must_use]
    pub fn lock_manager(&self, store: Arc<dyn DavStore>) -> LockManager {
        LockManager::new(store, self)
    }

    /// The request's `If-Match` / `If-None-Match` preconditions.
    #[must_use]
    pub fn conditional(&self) -> ConditionalRequest {
        ConditionalRequest::new(
            self.etag_if_match.clone(),
            self.etag_if_none_match.clone(),
            &self.method,
        )
    }
}
