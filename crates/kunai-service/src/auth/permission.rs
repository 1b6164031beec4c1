//! Derivation of the caller's permissions against a target identity.

use kunai_db::store::DavStore;

use super::capability::{Capability, PermissionSet};
use crate::request::identity::{CallerIdentity, Identity};

/// ## Summary
/// Computes the capabilities `caller` holds for a request on `path`.
///
/// Rules apply in order and the first match wins:
/// 1. The root collection `/` is readable by everyone.
/// 2. Administrators and callers addressing themselves get `all`.
/// 3. Otherwise the store's relationship letters are decoded.
///
/// A missing target, a missing relationship or a store failure yields the
/// empty set. This never errors.
#[tracing::instrument(skip(store, caller, target), fields(caller = caller.id, target = target.map(|t| t.id)))]
pub async fn resolve_permissions(
    store: &dyn DavStore,
    path: &str,
    caller: &CallerIdentity,
    target: Option<&Identity>,
) -> PermissionSet {
    if path == "/" {
        return PermissionSet::only(Capability::Read);
    }

    if caller.is_admin || target.is_some_and(|t| t.id == caller.id) {
        return PermissionSet::only(Capability::All);
    }

    let Some(target) = target else {
        tracing::debug!("No target identity, no permissions");
        return PermissionSet::empty();
    };

    match store.permissions_between(caller.id, target.id).await {
        Ok(Some(letters)) => {
            let permissions = PermissionSet::from_relationship(&letters);
            tracing::debug!(%letters, %permissions, "Decoded relationship");
            permissions
        }
        Ok(None) => PermissionSet::empty(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load relationship, denying access");
            PermissionSet::empty()
        }
    }
}
