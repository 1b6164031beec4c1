//! Query builder functions for `WebDAV` locks.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use kunai_core::util::path::self_and_ancestors;

use crate::db::schema::locks;

/// ## Summary
/// Returns a query to select locks that have not expired at `now`.
#[must_use]
pub fn live(now: DateTime<Utc>) -> locks::BoxedQuery<'static, diesel::pg::Pg> {
    locks::table.filter(locks::expiry.gt(now)).into_boxed()
}

/// ## Summary
/// Returns a query to find a lock by token.
#[must_use]
pub fn by_token(token: &str) -> locks::BoxedQuery<'_, diesel::pg::Pg> {
    locks::table
        .filter(locks::opaquelocktoken.eq(token))
        .into_boxed()
}

/// ## Summary
/// Returns live locks held on `path` itself or on one of its ancestors.
///
/// Locks below `path` are never included. The result is a superset; callers
/// narrow it with the lock's own depth.
#[must_use]
pub fn overlapping(path: &str, now: DateTime<Utc>) -> locks::BoxedQuery<'static, diesel::pg::Pg> {
    live(now).filter(locks::dav_name.eq_any(self_and_ancestors(path)))
}
