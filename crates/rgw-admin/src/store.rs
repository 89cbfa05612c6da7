//! Admin store trait.
//!
//! The four-operation contract the reconciliation core consumes. Transports
//! (HTTP clients, fakes) implement this; consumers never depend on a
//! concrete client.

use async_trait::async_trait;

use crate::account::Account;
use crate::error::AdminResult;

/// Operations on accounts held by the administrative service.
///
/// The service is authoritative ground truth. No retry or idempotency
/// guarantee is assumed from implementations: callers must not blindly
/// repeat an operation without re-fetching state first.
///
/// Implementations are shared read-only across callers (`Arc<S>`); all
/// methods take `&self`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create a new account.
    ///
    /// Fails with [`AdminError::AlreadyExists`] if the identifier is taken
    /// and [`AdminError::InvalidInput`] if it is invalid. An account created
    /// without an explicit `max_buckets` receives the service default.
    ///
    /// # Returns
    /// The account as stored, including any service-assigned values.
    ///
    /// [`AdminError::AlreadyExists`]: crate::error::AdminError::AlreadyExists
    /// [`AdminError::InvalidInput`]: crate::error::AdminError::InvalidInput
    async fn create_account(&self, account: Account) -> AdminResult<Account>;

    /// Fetch an account by identifier.
    ///
    /// Fails with [`AdminError::NotFound`] if no such account exists.
    ///
    /// [`AdminError::NotFound`]: crate::error::AdminError::NotFound
    async fn get_account(&self, user_id: &str) -> AdminResult<Account>;

    /// Replace an existing account.
    ///
    /// Full-replace semantics for the fields present in the input: `id` and
    /// `display_name` overwrite the stored values, and a `Some` quota
    /// overwrites the stored quota. An absent quota retains the prior stored
    /// value, so callers that want a full overwrite must fetch and merge
    /// explicitly.
    ///
    /// # Returns
    /// The account as stored after the modification.
    async fn modify_account(&self, account: Account) -> AdminResult<Account>;

    /// Remove an account by identifier.
    async fn remove_account(&self, user_id: &str) -> AdminResult<()>;
}
