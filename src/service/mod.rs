//! Service layer: business logic orchestration.
//!
//! Each service owns a clone of the [`crate::persistence::SqliteStore`]
//! handed to it at startup and sequences store calls for one operation.
//! [`LedgerService`] carries the only multi-step mutating flow.

pub mod account_service;
pub mod catalog_service;
pub mod ledger_service;

pub use account_service::{AccountService, Standing};
pub use catalog_service::{CatalogService, ProductListing};
pub use ledger_service::{LedgerService, PendingTransfer, TransferReceipt, TransferRequest};

/// Opens an in-memory store for service tests.
#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) async fn test_store() -> crate::persistence::SqliteStore {
    let Ok(store) = crate::persistence::SqliteStore::in_memory().await else {
        panic!("in-memory store");
    };
    store
}
