//! Account domain service.
//!
//! Implements [`IdentityService`] on top of an [`AccountRepository`]. Argon2
//! hashing is CPU bound, so it runs on Tokio's blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::password::{PasswordHashError, hash_password, verify_password};
use crate::domain::ports::{AccountRepository, AccountRepositoryError, IdentityService};
use crate::domain::{
    Error, IdentityName, LoginCredentials, NewAccount, Registration, normalize,
};

/// Identity service backed by an account store.
#[derive(Clone)]
pub struct AccountService<R> {
    repo: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service over `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: AccountRepositoryError) -> Error {
    match error {
        AccountRepositoryError::Connection { message } => {
            Error::internal(format!("account repository unavailable: {message}"))
        }
        AccountRepositoryError::Query { message } => {
            Error::internal(format!("account repository error: {message}"))
        }
        AccountRepositoryError::DuplicateName { name } => duplicate_name(&name),
    }
}

fn duplicate_name(name: &str) -> Error {
    Error::invalid_request(format!("username '{name}' is already taken")).with_details(json!({
        "field": "email",
        "code": "duplicate_user_name",
    }))
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid credentials")
}

async fn run_blocking<T, F>(work: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, PasswordHashError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result.map_err(map_hash_error),
        Err(err) => Err(Error::internal(format!("password task failed: {err}"))),
    }
}

#[async_trait]
impl<R> IdentityService for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, registration: &Registration) -> Result<IdentityName, Error> {
        let name = registration.name().clone();
        let existing = self
            .repo
            .find_by_normalized_name(&name.normalized())
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Err(duplicate_name(name.as_ref()));
        }

        let password = registration.password().to_owned();
        let hash = run_blocking(move || {
            let password = zeroize::Zeroizing::new(password);
            hash_password(&password)
        })
        .await?;

        let account = self
            .repo
            .create(&NewAccount::new(name, hash))
            .await
            .map_err(map_repository_error)?;
        Ok(account.name)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<IdentityName, Error> {
        let Some(account) = self
            .repo
            .find_by_normalized_name(&normalize(credentials.email()))
            .await
            .map_err(map_repository_error)?
        else {
            return Err(invalid_credentials());
        };

        let password = zeroize::Zeroizing::new(credentials.password().to_owned());
        let stored_hash = account.password_hash.clone();
        let verified = run_blocking(move || verify_password(&password, &stored_hash)).await?;
        if verified {
            Ok(account.name)
        } else {
            Err(invalid_credentials())
        }
    }
}
