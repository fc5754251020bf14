//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! Name uniqueness is enforced by the unique index on `normalized_name`; a
//! violation surfaces as [`AccountRepositoryError::DuplicateName`] so racing
//! registrations cannot both succeed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, IdentityName, NewAccount};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel-backed implementation of the account repository port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let AccountRow {
        id,
        name,
        normalized_name,
        password_hash,
        created_at: _,
    } = row;
    let name = IdentityName::new(name).map_err(|err| {
        AccountRepositoryError::query(format!("account {id} has an invalid name: {err}"))
    })?;
    Ok(Account {
        id,
        name,
        normalized_name,
        password_hash,
    })
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewAccountRow {
            name: account.name.as_ref(),
            normalized_name: &account.normalized_name,
            password_hash: &account.password_hash,
        };

        let row = diesel::insert_into(accounts::table)
            .values(&new_row)
            .returning(AccountRow::as_returning())
            .get_result::<AccountRow>(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AccountRepositoryError::duplicate_name(account.name.as_ref())
                } else {
                    map_diesel_error(err)
                }
            })?;
        row_to_account(row)
    }

    async fn find_by_normalized_name(
        &self,
        normalized_name: &str,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = accounts::table
            .filter(accounts::normalized_name.eq(normalized_name))
            .select(AccountRow::as_select())
            .first::<AccountRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }
}
