//! Catalog service: current event and product listings.

use crate::domain::ProductKind;
use crate::error::FestivalError;
use crate::persistence::SqliteStore;
use crate::persistence::models::{Event, Product};

/// Products split by listing direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    /// Type-0 rows.
    pub buy: Vec<Product>,
    /// Type-1 rows.
    pub sell: Vec<Product>,
}

/// Read-only festival catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: SqliteStore,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns the event flagged as current.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::EventNotFound`] when no row is flagged, or
    /// [`FestivalError::Storage`] on database failure.
    pub async fn current_event(&self) -> Result<Event, FestivalError> {
        self.store
            .current_event()
            .await?
            .ok_or(FestivalError::EventNotFound)
    }

    /// Returns buy and sell listings, each from its own query.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn products(&self) -> Result<ProductListing, FestivalError> {
        let buy = self.store.products_by_kind(ProductKind::Buy).await?;
        let sell = self.store.products_by_kind(ProductKind::Sell).await?;
        Ok(ProductListing { buy, sell })
    }
}
