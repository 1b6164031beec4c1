use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// A row of the `usr` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::usr)]
#[diesel(primary_key(user_no))]
#[diesel(check_for_backend(Pg))]
pub struct Usr {
    pub user_no: i32,
    pub active: bool,
    pub username: String,
    pub email: Option<String>,
    pub fullname: Option<String>,
    pub is_admin: bool,
}
