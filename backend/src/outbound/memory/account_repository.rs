//! In-memory `AccountRepository`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, NewAccount};

#[derive(Debug, Default)]
struct AccountTable {
    next_id: i32,
    by_normalized_name: HashMap<String, Account>,
}

/// Account store keyed by normalized name.
///
/// The existence check and the insert happen under one write lock, so two
/// concurrent registrations of the same name cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    table: RwLock<AccountTable>,
}

impl InMemoryAccountRepository {
    /// Empty store; every account is lost when the process exits.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AccountRepositoryError {
    AccountRepositoryError::query("account table lock poisoned")
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        if table
            .by_normalized_name
            .contains_key(&account.normalized_name)
        {
            return Err(AccountRepositoryError::duplicate_name(
                account.name.as_ref(),
            ));
        }
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| AccountRepositoryError::query("account id space exhausted"))?;
        let stored = Account {
            id: table.next_id,
            name: account.name.clone(),
            normalized_name: account.normalized_name.clone(),
            password_hash: account.password_hash.clone(),
        };
        table
            .by_normalized_name
            .insert(stored.normalized_name.clone(), stored.clone());
        Ok(stored)
    }

    async fn find_by_normalized_name(
        &self,
        normalized_name: &str,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.by_normalized_name.get(normalized_name).cloned())
    }
}
