//! Desired- and persisted-state records.
//!
//! The host exchanges records as JSON objects with the attributes `user_id`
//! (required), `display_name` (required), and `max_buckets` (optional
//! integer). Decoding and constraint failures are binding errors and abort
//! an operation before any remote call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReconcileError, ReconcileResult};

/// The account configuration an operator declares should exist.
///
/// Input to `create` and `update`. An absent `max_buckets` means "not
/// explicitly configured": the service default applies and the persisted
/// record keeps the field absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSpec {
    pub user_id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_buckets: Option<u32>,
}

impl AccountSpec {
    /// Create a spec with no explicit quota.
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            max_buckets: None,
        }
    }

    /// Set an explicit bucket quota.
    #[must_use]
    pub fn with_max_buckets(mut self, max_buckets: u32) -> Self {
        self.max_buckets = Some(max_buckets);
        self
    }

    /// Bind a spec from the host's JSON representation.
    pub fn from_value(value: Value) -> ReconcileResult<Self> {
        let spec: Self = serde_json::from_value(value)
            .map_err(|e| ReconcileError::binding(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check the constraints the declarative schema requires.
    pub fn validate(&self) -> ReconcileResult<()> {
        if self.user_id.is_empty() {
            return Err(ReconcileError::binding("user_id must not be empty"));
        }
        if self.display_name.is_empty() {
            return Err(ReconcileError::binding("display_name must not be empty"));
        }
        Ok(())
    }
}

/// The last-known, normalized reflection of the remote account.
///
/// Produced by `create`, `read`, and `update`; owned and persisted by the
/// host. Always reflects the remote values at the moment of the call that
/// produced it, with the quota normalized so the service default reads as
/// "unconfigured".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountRecord {
    pub user_id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_buckets: Option<u32>,
}

impl AccountRecord {
    /// Seed a record from an externally supplied identifier (adoption).
    ///
    /// Only `user_id` is populated; the display name is left empty until the
    /// mandatory follow-up `read` replaces it with the remote value.
    pub fn imported(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: String::new(),
            max_buckets: None,
        }
    }

    /// Bind a previously persisted record from the host's JSON
    /// representation.
    pub fn from_value(value: Value) -> ReconcileResult<Self> {
        serde_json::from_value(value).map_err(|e| ReconcileError::binding(e.to_string()))
    }
}
