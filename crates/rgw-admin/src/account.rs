//! Account entity.
//!
//! The wire shape exchanged with the administrative service:
//! `{ "id": string, "display_name": string, "max_buckets": int | absent }`.

use serde::{Deserialize, Serialize};

/// Quota the service assigns when an account is created without an explicit
/// `max_buckets` value.
pub const DEFAULT_MAX_BUCKETS: u32 = 1000;

/// A storage-gateway account as held by the administrative service.
///
/// An unset `max_buckets` is omitted from the serialized form entirely, so
/// the service applies its own default instead of receiving an explicit
/// value. The service itself always stores a concrete quota; only the wire
/// and declarative representations use absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier. Immutable once created; the key for all
    /// lookups.
    pub id: String,

    /// Human-readable display name.
    pub display_name: String,

    /// Bucket quota. `None` means "let the service decide".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_buckets: Option<u32>,
}

impl Account {
    /// Create an account with no explicit quota.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_quota_is_absent_on_the_wire() {
        let account = Account::new("alice", "Alice A");
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["id"], "alice");
        assert_eq!(json["display_name"], "Alice A");
        assert!(json.get("max_buckets").is_none());
    }

    #[test]
    fn explicit_quota_round_trips() {
        let account = Account::new("bob", "Bob B").with_max_buckets(50);
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(back, account);
        assert_eq!(back.max_buckets, Some(50));
    }

    #[test]
    fn missing_quota_deserializes_to_none() {
        let account: Account =
            serde_json::from_str(r#"{"id":"carol","display_name":"Carol C"}"#).unwrap();
        assert_eq!(account.max_buckets, None);
    }
}
