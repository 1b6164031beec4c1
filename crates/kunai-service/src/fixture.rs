//! In-memory `DavStore`.
//!
//! Holds users, collections, relationships and locks in plain collections
//! and counts every store call. Used to drive the gate without a database.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use kunai_core::util::path::{PathRelation, relation};
use kunai_db::error::{DbError, DbResult};
use kunai_db::model::lock::{DavLock, LOCK_DEPTH_INFINITY};
use kunai_db::model::usr::Usr;
use kunai_db::store::DavStore;
use kunai_rfc::rfc::dav::core::Depth;

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<Usr>,
    collections: HashSet<String>,
    grants: HashMap<(i32, i32), String>,
    locks: Vec<DavLock>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user(mut self, user_no: i32, username: &str, email: Option<&str>, is_admin: bool) -> Self {
        self.users.push(Usr {
            user_no,
            active: true,
            username: username.to_string(),
            email: email.map(ToString::to_string),
            fullname: None,
            is_admin,
        });
        self
    }

    #[must_use]
    pub fn with_collection(mut self, dav_name: &str) -> Self {
        self.collections.insert(dav_name.to_string());
        self
    }

    /// `caller` holds `letters` against `target`.
    #[must_use]
    pub fn with_grant(mut self, caller: i32, target: i32, letters: &str) -> Self {
        self.grants.insert((caller, target), letters.to_string());
        self
    }

    /// Adds a lock expiring an hour from now.
    #[must_use]
    pub fn with_lock(self, token: &str, dav_name: &str, depth: Depth) -> Self {
        self.with_lock_expiring(token, dav_name, depth, Utc::now() + Duration::hours(1))
    }

    #[must_use]
    pub fn with_lock_expiring(
        mut self,
        token: &str,
        dav_name: &str,
        depth: Depth,
        expiry: DateTime<Utc>,
    ) -> Self {
        self.locks.push(DavLock {
            token: token.to_string(),
            dav_name: dav_name.to_string(),
            depth: if depth.is_infinite() {
                LOCK_DEPTH_INFINITY
            } else {
                0
            },
            owner: None,
            expiry,
        });
        self
    }

    /// Makes every subsequent call fail with a database error.
    #[must_use]
    pub fn failing(self) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        self
    }

    /// Number of store calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> DbResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::DatabaseError(diesel_unavailable()));
        }
        Ok(())
    }
}

fn diesel_unavailable() -> diesel::result::Error {
    diesel::result::Error::DatabaseError(
        diesel::result::DatabaseErrorKind::ClosedConnection,
        Box::new("memory store is failing".to_string()),
    )
}

#[async_trait]
impl DavStore for MemoryStore {
    async fn collection_exists(&self, dav_name: &str) -> DbResult<bool> {
        self.enter()?;
        Ok(self.collections.contains(dav_name))
    }

    async fn user_by_username(&self, username: &str) -> DbResult<Option<Usr>> {
        self.enter()?;
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn user_by_email(&self, email: &str) -> DbResult<Option<Usr>> {
        self.enter()?;
        Ok(self
            .users
            .iter()
            .filter(|u| {
                u.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .min_by_key(|u| u.user_no)
            .cloned())
    }

    async fn permissions_between(&self, caller: i32, target: i32) -> DbResult<Option<String>> {
        self.enter()?;
        Ok(self.grants.get(&(caller, target)).cloned())
    }

    async fn locks_for_path(&self, path: &str) -> DbResult<Vec<DavLock>> {
        self.enter()?;
        let now = Utc::now();
        Ok(self
            .locks
            .iter()
            .filter(|lock| !lock.is_expired_at(now))
            .filter(|lock| {
                matches!(
                    relation(&lock.dav_name, path),
                    Some(PathRelation::Same | PathRelation::Ancestor(_))
                )
            })
            .cloned()
            .collect())
    }

    async fn lock_by_token(&self, token: &str) -> DbResult<Option<DavLock>> {
        self.enter()?;
        Ok(self.locks.iter().find(|l| l.token == token).cloned())
    }
}
