//! Store capability consumed by the request gate.
//!
//! The gate only reads: it probes collections, looks up users, asks for the
//! relationship between two users and loads locks. Writes stay with the
//! method handlers.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::DbProvider;
use crate::db::connection::DbPool;
use crate::db::query;
use crate::db::schema::{collection, get_permissions};
use crate::error::DbResult;
use crate::model::lock::DavLock;
use crate::model::usr::Usr;

#[async_trait]
pub trait DavStore: Send + Sync {
    /// Whether a collection exists with exactly this `dav_name`.
    async fn collection_exists(&self, dav_name: &str) -> DbResult<bool>;

    async fn user_by_username(&self, username: &str) -> DbResult<Option<Usr>>;

    /// Case-insensitive email lookup. The lowest `user_no` wins on duplicates.
    async fn user_by_email(&self, email: &str) -> DbResult<Option<Usr>>;

    /// Relationship letters `caller` holds against `target`, if any.
    async fn permissions_between(&self, caller: i32, target: i32) -> DbResult<Option<String>>;

    /// Live locks on `path` and its ancestors.
    async fn locks_for_path(&self, path: &str) -> DbResult<Vec<DavLock>>;

    async fn lock_by_token(&self, token: &str) -> DbResult<Option<DavLock>>;
}

#[async_trait]
impl DavStore for DbPool {
    #[tracing::instrument(skip(self))]
    async fn collection_exists(&self, dav_name: &str) -> DbResult<bool> {
        let mut conn = self.get_connection().await?;
        let found = query::collection::by_dav_name(dav_name)
            .select(collection::collection_id)
            .first::<i64>(&mut conn)
            .await
            .optional()?;
        Ok(found.is_some())
    }

    #[tracing::instrument(skip(self))]
    async fn user_by_username(&self, username: &str) -> DbResult<Option<Usr>> {
        let mut conn = self.get_connection().await?;
        let user = query::usr::by_username(username)
            .select(Usr::as_select())
            .first::<Usr>(&mut conn)
            .await
            .optional()?;
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn user_by_email(&self, email: &str) -> DbResult<Option<Usr>> {
        let mut conn = self.get_connection().await?;
        let user = query::usr::by_email(email)
            .select(Usr::as_select())
            .first::<Usr>(&mut conn)
            .await
            .optional()?;
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn permissions_between(&self, caller: i32, target: i32) -> DbResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let letters = diesel::select(get_permissions(caller, target))
            .get_result::<Option<String>>(&mut conn)
            .await?;
        Ok(letters)
    }

    #[tracing::instrument(skip(self))]
    async fn locks_for_path(&self, path: &str) -> DbResult<Vec<DavLock>> {
        let mut conn = self.get_connection().await?;
        let locks = query::locks::overlapping(path, chrono::Utc::now())
            .select(DavLock::as_select())
            .load::<DavLock>(&mut conn)
            .await?;
        tracing::debug!(count = locks.len(), "Loaded candidate locks");
        Ok(locks)
    }

    #[tracing::instrument(skip(self))]
    async fn lock_by_token(&self, token: &str) -> DbResult<Option<DavLock>> {
        let mut conn = self.get_connection().await?;
        let lock = query::locks::by_token(token)
            .select(DavLock::as_select())
            .first::<DavLock>(&mut conn)
            .await
            .optional()?;
        Ok(lock)
    }
}
