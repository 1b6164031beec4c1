//! Which locks govern a request path.
//!
//! Paths are compared segment by segment. A lock on `/alice/cal/` never
//! governs `/alice/calendar/`.

use chrono::{DateTime, Utc};

use kunai_core::util::path::{PathRelation, relation};
use kunai_db::model::lock::DavLock;

/// How a governing lock relates to the request path. Orders nearest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LockRank {
    /// Held on the request path itself.
    Exact,
    /// Infinite lock held `n` levels above the request path.
    Ancestor(usize),
}

/// ## Summary
/// Ranks `lock` against a request on `path`, or `None` when the lock does
/// not block it.
///
/// - A lock on the path itself governs it at any lock depth.
/// - A lock on an ancestor governs it only when the lock is infinite.
/// - A lock below the path never governs it.
/// - Expired locks never govern.
#[must_use]
pub fn rank(lock: &DavLock, path: &str, now: DateTime<Utc>) -> Option<LockRank> {
    if lock.is_expired_at(now) {
        return None;
    }

    match relation(&lock.dav_name, path)? {
        PathRelation::Same => Some(LockRank::Exact),
        PathRelation::Ancestor(levels) => lock.is_infinite().then_some(LockRank::Ancestor(levels)),
        PathRelation::Descendant(_) => None,
    }
}
