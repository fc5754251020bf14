//! Port for account persistence.

use async_trait::async_trait;

use crate::domain::{Account, NewAccount};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
        /// An account with the same normalized name already exists.
        DuplicateName { name: String } =>
            "user name '{name}' is already taken",
    }
}

/// Port for account storage and lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert an account, failing with
    /// [`AccountRepositoryError::DuplicateName`] when the normalized name is
    /// taken.
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError>;

    /// Look an account up by its normalized name.
    async fn find_by_normalized_name(
        &self,
        normalized_name: &str,
    ) -> Result<Option<Account>, AccountRepositoryError>;
}

/// Fixture repository with no accounts that rejects every insert.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountRepository;

#[async_trait]
impl AccountRepository for FixtureAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError> {
        Err(AccountRepositoryError::connection(format!(
            "fixture repository cannot store {}",
            account.name
        )))
    }

    async fn find_by_normalized_name(
        &self,
        _normalized_name: &str,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        Ok(None)
    }
}
