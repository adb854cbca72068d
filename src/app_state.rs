//! Shared application state injected into all Axum handlers.

use crate::persistence::SqliteStore;
use crate::service::{AccountService, CatalogService, LedgerService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Every service holds its own clone of the same store handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registration, profiles and rankings.
    pub accounts: AccountService,
    /// Current event and products.
    pub catalog: CatalogService,
    /// Manager give/take.
    pub ledger: LedgerService,
}

impl AppState {
    /// Builds every service over `store`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self {
            accounts: AccountService::new(store.clone()),
            catalog: CatalogService::new(store.clone()),
            ledger: LedgerService::new(store),
        }
    }
}
