//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values at the boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{accounts, books};

/// Row struct for reading from the accounts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: i32,
    pub name: String,
    pub normalized_name: String,
    pub password_hash: String,
    #[expect(dead_code, reason = "audit column not surfaced by the API")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new accounts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub name: &'a str,
    pub normalized_name: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading from the books table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub created_by: String,
    #[expect(dead_code, reason = "audit column not surfaced by the API")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new books.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub description: &'a str,
    pub created_by: &'a str,
}

/// Changeset for the caller-editable book columns.
///
/// `created_by` is absent: updates never change ownership.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = books)]
pub(crate) struct BookUpdate<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub description: &'a str,
}
