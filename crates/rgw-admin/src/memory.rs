//! In-memory account store.
//!
//! A reference [`AccountStore`] backed by a `HashMap`, mirroring the
//! service's observable behavior: it applies the default quota on create and
//! implements the modify merge rule. Used as the fake store in tests and as
//! executable documentation of the consumed contract.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::account::{Account, DEFAULT_MAX_BUCKETS};
use crate::error::{AdminError, AdminResult};
use crate::store::AccountStore;

/// Selects which store operation a fault injection applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Create,
    Get,
    Modify,
    Remove,
}

/// In-process account store.
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
    /// Quota assigned when a created account carries none.
    default_max_buckets: u32,
    /// Error returned by the next matching operation. Single-shot.
    fail_next: Mutex<Option<(Option<StoreOp>, AdminError)>>,
}

impl InMemoryAccountStore {
    /// Create an empty store using the service default quota.
    pub fn new() -> Self {
        Self::with_default_quota(DEFAULT_MAX_BUCKETS)
    }

    /// Create an empty store with a custom default quota.
    pub fn with_default_quota(default_max_buckets: u32) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            default_max_buckets,
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next operation fail with `error` instead of executing.
    pub async fn inject_failure(&self, error: AdminError) {
        *self.fail_next.lock().await = Some((None, error));
    }

    /// Make the next invocation of `op` fail with `error`. Other operations
    /// pass through untouched until `op` is reached.
    pub async fn inject_failure_for(&self, op: StoreOp, error: AdminError) {
        *self.fail_next.lock().await = Some((Some(op), error));
    }

    /// Check whether an account exists without going through the trait.
    pub async fn contains(&self, user_id: &str) -> bool {
        self.accounts.read().await.contains_key(user_id)
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the store holds no accounts.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    async fn take_injected(&self, op: StoreOp) -> AdminResult<()> {
        let mut pending = self.fail_next.lock().await;
        match pending.take() {
            Some((target, error)) if target.is_none() || target == Some(op) => Err(error),
            other => {
                *pending = other;
                Ok(())
            }
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create_account(&self, account: Account) -> AdminResult<Account> {
        self.take_injected(StoreOp::Create).await?;

        if account.id.is_empty() {
            return Err(AdminError::invalid_input("account identifier is empty"));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.id) {
            return Err(AdminError::already_exists(&account.id));
        }

        let stored = Account {
            max_buckets: Some(account.max_buckets.unwrap_or(self.default_max_buckets)),
            ..account
        };
        debug!(user_id = %stored.id, max_buckets = ?stored.max_buckets, "account created");
        accounts.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn get_account(&self, user_id: &str) -> AdminResult<Account> {
        self.take_injected(StoreOp::Get).await?;

        self.accounts
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| AdminError::not_found(user_id))
    }

    async fn modify_account(&self, account: Account) -> AdminResult<Account> {
        self.take_injected(StoreOp::Modify).await?;

        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.id)
            .ok_or_else(|| AdminError::not_found(&account.id))?;

        stored.display_name = account.display_name;
        if let Some(max_buckets) = account.max_buckets {
            stored.max_buckets = Some(max_buckets);
        }
        debug!(user_id = %stored.id, max_buckets = ?stored.max_buckets, "account modified");
        Ok(stored.clone())
    }

    async fn remove_account(&self, user_id: &str) -> AdminResult<()> {
        self.take_injected(StoreOp::Remove).await?;

        let mut accounts = self.accounts.write().await;
        if accounts.remove(user_id).is_none() {
            return Err(AdminError::not_found(user_id));
        }
        debug!(user_id = %user_id, "account removed");
        Ok(())
    }
}
