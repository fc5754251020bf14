//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts.
    ///
    /// `normalized_name` carries a unique index; `name` keeps the casing the
    /// account registered with.
    accounts (id) {
        id -> Int4,
        name -> Varchar,
        normalized_name -> Varchar,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Book records, each owned by the account named in `created_by`.
    books (id) {
        id -> Int4,
        title -> Text,
        author -> Text,
        description -> Text,
        created_by -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(accounts, books);
