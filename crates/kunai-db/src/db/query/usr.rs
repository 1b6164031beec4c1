//! Query builder functions for users.

use diesel::prelude::*;

use super::text_match::escape_like_pattern;
use crate::db::schema::usr;

/// ## Summary
/// Returns a query to select all users.
#[must_use]
pub fn all() -> usr::BoxedQuery<'static, diesel::pg::Pg> {
    usr::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a user by exact username.
#[must_use]
pub fn by_username(username: &str) -> usr::BoxedQuery<'_, diesel::pg::Pg> {
    all().filter(usr::username.eq(username))
}

/// ## Summary
/// Returns a query to find users by email, ignoring case.
#[must_use]
pub fn by_email(email: &str) -> usr::BoxedQuery<'static, diesel::pg::Pg> {
    all()
        .filter(usr::email.ilike(escape_like_pattern(email)))
        .order(usr::user_no.asc())
}
