//! Admin store error types.
//!
//! Error definitions with not-found/transient classification so callers can
//! tell a vanished entity apart from a failed round trip.

use thiserror::Error;

/// Error returned by [`AccountStore`](crate::store::AccountStore) operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The account does not exist on the service.
    #[error("account not found: {user_id}")]
    NotFound { user_id: String },

    /// An account with this identifier already exists (create conflict).
    #[error("account already exists: {user_id}")]
    AlreadyExists { user_id: String },

    /// The service rejected the request data.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The caller is not permitted to perform the operation.
    #[error("access denied for {operation}")]
    AccessDenied { operation: String },

    /// Communication with the service failed (usually transient).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AdminError {
    /// Check whether this error means the entity is absent on the service.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound { .. })
    }

    /// Check whether this error is transient and a later attempt may succeed.
    ///
    /// The store itself never retries; retry policy belongs to the transport
    /// layer or the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, AdminError::Transport { .. })
    }

    /// Get a stable code for classification and logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::NotFound { .. } => "NOT_FOUND",
            AdminError::AlreadyExists { .. } => "ALREADY_EXISTS",
            AdminError::InvalidInput { .. } => "INVALID_INPUT",
            AdminError::AccessDenied { .. } => "ACCESS_DENIED",
            AdminError::Transport { .. } => "TRANSPORT",
        }
    }

    // Convenience constructors

    /// Create a not-found error.
    pub fn not_found(user_id: impl Into<String>) -> Self {
        AdminError::NotFound {
            user_id: user_id.into(),
        }
    }

    /// Create an already-exists error.
    pub fn already_exists(user_id: impl Into<String>) -> Self {
        AdminError::AlreadyExists {
            user_id: user_id.into(),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AdminError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        AdminError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error with an underlying cause.
    pub fn transport_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AdminError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for admin store operations.
pub type AdminResult<T> = Result<T, AdminError>;
