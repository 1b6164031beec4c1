use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};

use kunai_rfc::rfc::dav::core::Depth;

use crate::db::schema;

/// Stored depth of an infinite lock.
pub const LOCK_DEPTH_INFINITY: i32 = 9999;

/// A `WebDAV` lock held on `dav_name`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::locks)]
#[diesel(primary_key(opaquelocktoken))]
#[diesel(check_for_backend(Pg))]
pub struct DavLock {
    #[diesel(column_name = opaquelocktoken)]
    pub token: String,
    pub dav_name: String,
    pub depth: i32,
    pub owner: Option<String>,
    pub expiry: DateTime<Utc>,
}

impl DavLock {
    /// Locks are either depth 0 or infinite; any non-zero stored depth counts as infinite.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.depth != 0
    }

    #[must_use]
    pub const fn depth(&self) -> Depth {
        if self.is_infinite() {
            Depth::Infinity
        } else {
            Depth::Zero
        }
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }
}
