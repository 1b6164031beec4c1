//! Query builder functions for collections.

use diesel::prelude::*;

use crate::db::schema::collection;

/// ## Summary
/// Returns a query to select all collections.
#[must_use]
pub fn all() -> collection::BoxedQuery<'static, diesel::pg::Pg> {
    collection::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a collection by its exact `dav_name`.
#[must_use]
pub fn by_dav_name(dav_name: &str) -> collection::BoxedQuery<'_, diesel::pg::Pg> {
    all().filter(collection::dav_name.eq(dav_name))
}
