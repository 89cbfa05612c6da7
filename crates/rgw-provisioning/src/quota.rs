//! Quota normalization.
//!
//! Pure transforms between the declarative representation of the bucket
//! quota (presence vs. absence) and the remote representation (the service
//! always stores a concrete integer).

use rgw_admin::DEFAULT_MAX_BUCKETS;

/// Outbound transform, declarative to remote.
///
/// An unconfigured quota stays absent so the service applies its own
/// default; an explicit quota passes through unchanged.
#[must_use]
pub fn declared_to_remote(declared: Option<u32>) -> Option<u32> {
    declared
}

/// Inbound transform, remote to declarative.
///
/// A remote quota equal to [`DEFAULT_MAX_BUCKETS`] collapses to absent,
/// folding the service's implicit default onto "unconfigured". Without this,
/// an operator who never set a quota would see permanent drift between the
/// desired and persisted records.
#[must_use]
pub fn remote_to_declared(remote: Option<u32>) -> Option<u32> {
    match remote {
        Some(DEFAULT_MAX_BUCKETS) => None,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_absent_stays_absent() {
        assert_eq!(declared_to_remote(None), None);
    }

    #[test]
    fn outbound_explicit_value_passes_through() {
        assert_eq!(declared_to_remote(Some(50)), Some(50));
        assert_eq!(
            declared_to_remote(Some(DEFAULT_MAX_BUCKETS)),
            Some(DEFAULT_MAX_BUCKETS)
        );
    }

    #[test]
    fn inbound_default_collapses_to_absent() {
        assert_eq!(remote_to_declared(Some(DEFAULT_MAX_BUCKETS)), None);
    }

    #[test]
    fn inbound_other_values_pass_through() {
        assert_eq!(remote_to_declared(Some(0)), Some(0));
        assert_eq!(remote_to_declared(Some(999)), Some(999));
        assert_eq!(remote_to_declared(Some(1001)), Some(1001));
        assert_eq!(remote_to_declared(None), None);
    }
}
