//! Reconciliation error types.
//!
//! A vanished remote account is surfaced as its own variant rather than a
//! generic remote failure, so the host can decide between recreating the
//! account and failing the run.

use thiserror::Error;

use rgw_admin::AdminError;

/// The lifecycle operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl LifecycleOperation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleOperation::Create => "create",
            LifecycleOperation::Read => "read",
            LifecycleOperation::Update => "update",
            LifecycleOperation::Delete => "delete",
        }
    }
}

impl std::fmt::Display for LifecycleOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`AccountReconciler`](crate::reconciler::AccountReconciler)
/// lifecycle operations.
///
/// Every error is terminal for the invoking operation: no retry, no backoff,
/// and no partial state is persisted. Control returns to the host, which
/// decides whether to re-invoke.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The desired or persisted record could not be decoded or failed its
    /// schema constraints. Reported before any remote call is attempted.
    #[error("invalid account record: {message}")]
    Binding { message: String },

    /// The remote account does not exist. Surfaced from `read` and from
    /// `update`'s pre-fetch so the host can treat the object as vanished.
    #[error("account not found: {user_id}")]
    NotFound { user_id: String },

    /// A remote call failed, carrying the operation name, the identifier,
    /// and the underlying store error.
    #[error("{operation} failed for account {user_id}: {source}")]
    Remote {
        operation: LifecycleOperation,
        user_id: String,
        #[source]
        source: AdminError,
    },
}

impl ReconcileError {
    /// Create a binding error.
    pub fn binding(message: impl Into<String>) -> Self {
        ReconcileError::Binding {
            message: message.into(),
        }
    }

    /// Check whether this error means the remote account is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReconcileError::NotFound { .. })
    }

    /// Classify a store failure for a lifecycle operation.
    ///
    /// A store-level not-found becomes the distinguished [`NotFound`]
    /// variant; everything else is wrapped as [`Remote`].
    ///
    /// [`NotFound`]: ReconcileError::NotFound
    /// [`Remote`]: ReconcileError::Remote
    pub(crate) fn from_store(
        operation: LifecycleOperation,
        user_id: &str,
        source: AdminError,
    ) -> Self {
        if source.is_not_found() {
            ReconcileError::NotFound {
                user_id: user_id.to_string(),
            }
        } else {
            ReconcileError::Remote {
                operation,
                user_id: user_id.to_string(),
                source,
            }
        }
    }
}

/// Result type for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;
