//! # Gateway Admin Contract
//!
//! Core abstractions for administering storage-gateway accounts.
//!
//! This crate defines the account entity as exchanged with the gateway's
//! administrative service, the [`AccountStore`] trait that transports
//! implement, and a classified error taxonomy that lets callers distinguish
//! a missing entity from a transport failure.
//!
//! ## Crate Organization
//!
//! - [`account`] - The [`Account`] entity and the service default constants
//! - [`error`] - [`AdminError`] with not-found/transient classification
//! - [`store`] - The [`AccountStore`] operations trait
//! - [`memory`] - [`InMemoryAccountStore`], an in-process reference store
//!
//! The store handle is injected once into each consumer and shared read-only
//! (`Arc<S>`); this crate holds no global state.

pub mod account;
pub mod error;
pub mod memory;
pub mod store;

pub use account::{Account, DEFAULT_MAX_BUCKETS};
pub use error::{AdminError, AdminResult};
pub use memory::{InMemoryAccountStore, StoreOp};
pub use store::AccountStore;

/// Prelude module for convenient imports.
///
/// ```
/// use rgw_admin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::account::{Account, DEFAULT_MAX_BUCKETS};
    pub use crate::error::{AdminError, AdminResult};
    pub use crate::memory::{InMemoryAccountStore, StoreOp};
    pub use crate::store::AccountStore;
}

// Re-export async_trait for store implementors.
pub use async_trait::async_trait;
