use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use kunai_db::model::lock::DavLock;
use kunai_db::store::DavStore;
use kunai_rfc::rfc::dav::core::Depth;
use kunai_rfc::rfc::dav::headers::IfHeader;

use super::scope::rank;
use crate::error::ServiceResult;
use crate::request::RequestContext;
use crate::response::{Outcome, lock_failure};

#[derive(Debug, Clone, PartialEq, Eq)]
enum LockState {
    Unchecked,
    /// The governing token, if any.
    Checked(Option<String>),
}

/// ## Summary
/// Lock checks for one request.
///
/// The first `is_locked` call loads the candidate locks and remembers the
/// answer; later calls reuse it. Lock rows are cached by token for the life
/// of the manager.
///
/// Checking and then writing is not atomic. Handlers that modify a resource
/// after `fail_if_locked` must still guard the write in the store.
pub struct LockManager {
    store: Arc<dyn DavStore>,
    path: String,
    depth: Depth,
    lock_token: Option<String>,
    if_header: Option<IfHeader>,
    state: LockState,
    cache: HashMap<String, DavLock>,
}

impl LockManager {
    #[must_use]
    pub fn new(store: Arc<dyn DavStore>, ctx: &RequestContext) -> Self {
        Self {
            store,
            path: ctx.path.clone(),
            depth: ctx.depth,
            lock_token: ctx.lock_token.clone(),
            if_header: ctx.if_clause.clone(),
            state: LockState::Unchecked,
            cache: HashMap::new(),
        }
    }

    /// ## Summary
    /// Returns the token of the lock governing this request, if any.
    ///
    /// A lock on the path itself comes first, then the nearest infinite
    /// ancestor lock. Locks below the path never govern it, whatever the
    /// request depth.
    ///
    /// ## Errors
    /// Returns a database error if the locks cannot be loaded.
    #[tracing::instrument(skip(self), fields(path = %self.path, depth = %self.depth))]
    pub async fn is_locked(&mut self) -> ServiceResult<Option<String>> {
        if let LockState::Checked(found) = &self.state {
            return Ok(found.clone());
        }

        let candidates = self.store.locks_for_path(&self.path).await?;
        let now = Utc::now();

        let mut governing: Vec<_> = candidates
            .iter()
            .filter_map(|lock| rank(lock, &self.path, now).map(|r| (r, &lock.token)))
            .collect();
        governing.sort_by_key(|(r, _)| *r);
        let found = governing.first().map(|(_, token)| (*token).clone());

        for lock in candidates {
            self.cache.entry(lock.token.clone()).or_insert(lock);
        }

        match &found {
            Some(token) => tracing::debug!(%token, "Request path is locked"),
            None => tracing::trace!("No lock governs request path"),
        }

        self.state = LockState::Checked(found.clone());
        Ok(found)
    }

    /// ## Summary
    /// Returns the lock row for `token`, from the cache or a single store lookup.
    ///
    /// ## Errors
    /// Returns a database error if the lookup fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_lock_row(&mut self, token: &str) -> ServiceResult<Option<DavLock>> {
        if let Some(lock) = self.cache.get(token) {
            return Ok(Some(lock.clone()));
        }

        let lock = self.store.lock_by_token(token).await?;
        if let Some(lock) = &lock {
            self.cache
                .entry(lock.token.clone())
                .or_insert_with(|| lock.clone());
        }
        Ok(lock)
    }

    /// Whether the request presents `token`, either as `Lock-Token` or in the `If` header.
    #[must_use]
    pub fn validate_lock_token(&self, token: &str) -> bool {
        self.lock_token.as_deref() == Some(token)
            || self
                .if_header
                .as_ref()
                .is_some_and(|header| header.contains_token(token))
    }

    /// ## Summary
    /// Returns the cached lock row for `token` once the path has been checked.
    ///
    /// ## Errors
    /// Returns a database error if the path check has to load locks and fails.
    pub async fn get_lock_details(&mut self, token: &str) -> ServiceResult<Option<DavLock>> {
        if self.state == LockState::Unchecked {
            self.is_locked().await?;
        }
        Ok(self.cache.get(token).cloned())
    }

    /// ## Summary
    /// Stops the request when a lock governs it and no matching token was sent.
    ///
    /// Continues with `None` when nothing is locked and with the token when
    /// the caller presented it.
    ///
    /// ## Errors
    /// Returns a database error if locks cannot be loaded, or an XML error
    /// if the 207 body cannot be written.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn fail_if_locked(&mut self) -> ServiceResult<Outcome<Option<String>>> {
        let Some(token) = self.is_locked().await? else {
            return Ok(Outcome::Continue(None));
        };

        if self.validate_lock_token(&token) {
            tracing::debug!(%token, "Caller holds the lock token");
            return Ok(Outcome::Continue(Some(token)));
        }

        let lock_path = self
            .get_lock_details(&token)
            .await?
            .map_or_else(|| self.path.clone(), |lock| lock.dav_name);

        tracing::info!(%token, %lock_path, "Request blocked by lock");
        let response = lock_failure(&lock_path, &self.path)?;
        Ok(Outcome::Terminate(response))
    }
}
