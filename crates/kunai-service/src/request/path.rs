//! Request path resolution.

use kunai_core::util::path::{first_segment, is_principal_path, last_segment};
use kunai_db::store::DavStore;

use super::identity::{CallerIdentity, Identity};
use crate::error::{ServiceError, ServiceResult};

const ILLEGAL_PATH_CHARS: [char; 4] = ['^', '[', '(', '\\'];

/// Where a request path points and whose resources it addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: String,
    /// Corrected path when a trailing slash was added.
    pub content_location: Option<String>,
    /// `None` only when the path names no user at all (the root).
    pub target: Option<Identity>,
    pub by_email: bool,
    pub is_collection: bool,
    pub is_principal: bool,
}

/// ## Summary
/// Maps an empty path to `/` and rejects paths with illegal characters.
///
/// ## Errors
/// Returns `IllegalPath` when the path contains `^`, `[`, `(` or `\`.
pub fn sanitize(raw: &str) -> ServiceResult<String> {
    if raw.contains(ILLEGAL_PATH_CHARS) {
        return Err(ServiceError::IllegalPath(raw.to_string()));
    }

    if raw.is_empty() {
        Ok("/".to_string())
    } else if raw.starts_with('/') {
        Ok(raw.to_string())
    } else {
        Ok(format!("/{raw}"))
    }
}

/// Loose `local@domain` check on a path segment.
#[must_use]
pub fn looks_like_email(segment: &str) -> bool {
    let Some((local, domain)) = segment.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !local.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.starts_with(|c: char| c.is_ascii_alphanumeric())
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// ## Summary
/// Resolves a sanitized path into its target identity and node kind.
///
/// A path without a trailing slash is probed as a collection; when one
/// exists the slash is appended and recorded as the content location. The
/// addressed identity comes from the email in the final segment (when
/// `allow_by_email` is set) or from the first segment as a username. Lookups
/// that miss or fail fall back to the caller. Store failures are logged and
/// never surface.
#[tracing::instrument(skip(store, caller))]
pub async fn resolve(
    store: &dyn DavStore,
    path: String,
    caller: &CallerIdentity,
    allow_by_email: bool,
) -> ResolvedPath {
    let mut path = path;
    let mut content_location = None;

    if !path.ends_with('/') {
        let candidate = format!("{path}/");
        match store.collection_exists(&candidate).await {
            Ok(true) => {
                tracing::debug!(%candidate, "Path names a collection, appending slash");
                content_location = Some(candidate.clone());
                path = candidate;
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Collection probe failed, keeping path as given");
            }
        }
    }

    let (target, by_email) = resolve_target(store, &path, caller, allow_by_email).await;

    ResolvedPath {
        is_collection: path.ends_with('/'),
        is_principal: is_principal_path(&path),
        content_location,
        target,
        by_email,
        path,
    }
}

async fn resolve_target(
    store: &dyn DavStore,
    path: &str,
    caller: &CallerIdentity,
    allow_by_email: bool,
) -> (Option<Identity>, bool) {
    let Some(username) = first_segment(path) else {
        return (None, false);
    };

    if allow_by_email
        && let Some(email) = last_segment(path).filter(|s| looks_like_email(s))
    {
        return match store.user_by_email(email).await {
            Ok(Some(user)) => (Some(Identity::from(&user)), true),
            Ok(None) => {
                tracing::debug!(%email, "No user with this email, using caller");
                (Some(caller.as_identity()), false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Email lookup failed, using caller");
                (Some(caller.as_identity()), false)
            }
        };
    }

    match store.user_by_username(username).await {
        Ok(Some(user)) => (Some(Identity::from(&user)), false),
        Ok(None) => {
            tracing::debug!(%username, "No such user, using caller");
            (Some(caller.as_identity()), false)
        }
        Err(e) => {
            tracing::warn!(error = %e, "User lookup failed, using caller");
            (Some(caller.as_identity()), false)
        }
    }
}
