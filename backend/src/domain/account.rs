//! Registered accounts held by the identity store.

use super::identity::IdentityName;

/// A stored account.
///
/// `normalized_name` is the unique lookup key; `name` keeps the casing the
/// user registered with and is what sessions and book ownership carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub name: IdentityName,
    pub normalized_name: String,
    pub password_hash: String,
}

/// Account awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: IdentityName,
    pub normalized_name: String,
    pub password_hash: String,
}

impl NewAccount {
    /// Build an insertable account, deriving the normalized name.
    #[must_use]
    pub fn new(name: IdentityName, password_hash: String) -> Self {
        Self {
            normalized_name: name.normalized(),
            name,
            password_hash,
        }
    }
}
