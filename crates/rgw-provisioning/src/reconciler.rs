//! Account lifecycle reconciliation.
//!
//! Translates declared-state records into admin store calls and store
//! results back into normalized records. One operation is invoked at a time
//! per account identifier; each runs to completion before the host issues
//! the next.

use std::sync::Arc;

use tracing::{error, info, instrument};

use rgw_admin::{Account, AccountStore};

use crate::error::{LifecycleOperation, ReconcileError, ReconcileResult};
use crate::quota;
use crate::record::{AccountRecord, AccountSpec};

/// Reconciles declared account state against the administrative service.
///
/// Holds a single immutable store handle injected at construction. The
/// reconciler performs no retries, caching, or background work; every remote
/// call is a single attempt whose failure is surfaced to the host.
///
/// Cancellation follows the async calling context: dropping a pending
/// lifecycle future cancels the in-flight store call, and because records
/// are only built after the awaited call returns, a cancelled operation
/// never yields partial local state.
pub struct AccountReconciler<S> {
    store: Arc<S>,
}

impl<S> AccountReconciler<S> {
    /// Create a reconciler over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for AccountReconciler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: AccountStore> AccountReconciler<S> {
    /// Create the account described by `desired`.
    ///
    /// The declared quota is sent outbound-normalized: an unconfigured quota
    /// is omitted so the service applies its own default. On success the
    /// returned record reflects the stored account, with the quota
    /// inbound-normalized. On failure no record is produced.
    #[instrument(skip_all, fields(user_id = %desired.user_id))]
    pub async fn create(&self, desired: &AccountSpec) -> ReconcileResult<AccountRecord> {
        desired.validate()?;

        let account = Account {
            id: desired.user_id.clone(),
            display_name: desired.display_name.clone(),
            max_buckets: quota::declared_to_remote(desired.max_buckets),
        };

        let created = match self.store.create_account(account).await {
            Ok(created) => created,
            Err(e) => {
                error!(error = %e, "failed to create account");
                return Err(ReconcileError::from_store(
                    LifecycleOperation::Create,
                    &desired.user_id,
                    e,
                ));
            }
        };

        info!(max_buckets = ?created.max_buckets, "account created");
        Ok(Self::record_from(created))
    }

    /// Refresh the persisted record from the remote account.
    ///
    /// A missing account surfaces as [`ReconcileError::NotFound`]; the host
    /// decides whether to recreate or fail. On success the record carries
    /// the remote values verbatim except the quota, which is
    /// inbound-normalized -- a remote default explicitly clears any stale
    /// persisted value.
    #[instrument(skip(self))]
    pub async fn read(&self, user_id: &str) -> ReconcileResult<AccountRecord> {
        let account = match self.store.get_account(user_id).await {
            Ok(account) => account,
            Err(e) => {
                error!(error = %e, "failed to read account");
                return Err(ReconcileError::from_store(
                    LifecycleOperation::Read,
                    user_id,
                    e,
                ));
            }
        };

        Ok(Self::record_from(account))
    }

    /// Reconcile the remote account to match `desired`.
    ///
    /// The store's modify is a full overwrite, so the current remote account
    /// is fetched first and merged: identifier and display name are
    /// overlaid unconditionally, the quota only when the spec sets it
    /// (otherwise the fetched value is retained). Fetch or modify failure
    /// aborts with no persisted mutation; a vanished account surfaces as
    /// [`ReconcileError::NotFound`].
    #[instrument(skip_all, fields(user_id = %desired.user_id))]
    pub async fn update(&self, desired: &AccountSpec) -> ReconcileResult<AccountRecord> {
        desired.validate()?;

        let mut current = match self.store.get_account(&desired.user_id).await {
            Ok(current) => current,
            Err(e) => {
                error!(error = %e, "failed to fetch account before update");
                return Err(ReconcileError::from_store(
                    LifecycleOperation::Update,
                    &desired.user_id,
                    e,
                ));
            }
        };

        current.id = desired.user_id.clone();
        current.display_name = desired.display_name.clone();
        current.max_buckets =
            quota::declared_to_remote(desired.max_buckets).or(current.max_buckets);

        let modified = match self.store.modify_account(current).await {
            Ok(modified) => modified,
            Err(e) => {
                error!(error = %e, "failed to update account");
                return Err(ReconcileError::from_store(
                    LifecycleOperation::Update,
                    &desired.user_id,
                    e,
                ));
            }
        };

        info!(max_buckets = ?modified.max_buckets, "account updated");
        Ok(Self::record_from(modified))
    }

    /// Remove the remote account.
    ///
    /// On success the host drops the persisted record entirely. On failure
    /// the record is left untouched and the error is surfaced.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str) -> ReconcileResult<()> {
        if let Err(e) = self.store.remove_account(user_id).await {
            error!(error = %e, "failed to delete account");
            return Err(ReconcileError::from_store(
                LifecycleOperation::Delete,
                user_id,
                e,
            ));
        }

        info!("account deleted");
        Ok(())
    }

    /// Adopt a pre-existing remote account by its external identifier.
    ///
    /// Seeds only `user_id` in the returned record and makes no remote call;
    /// the host's mandatory follow-up [`read`](Self::read) populates the
    /// remaining fields from the remote account.
    pub fn import(&self, external_id: &str) -> AccountRecord {
        info!(user_id = %external_id, "account adopted into managed state");
        AccountRecord::imported(external_id)
    }

    /// Project a remote account into a persisted record.
    ///
    /// Every field is copied verbatim except the quota, which passes through
    /// the inbound normalizer on all paths so that declared and persisted
    /// state stay convergent.
    fn record_from(account: Account) -> AccountRecord {
        AccountRecord {
            user_id: account.id,
            display_name: account.display_name,
            max_buckets: quota::remote_to_declared(account.max_buckets),
        }
    }
}
