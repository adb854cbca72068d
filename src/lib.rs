//! # ggm-festival-api
//!
//! HTTP API for the GGM festival coin ledger: the current event, a coin
//! ranking, the product catalog, user registration and profile lookup,
//! and manager-authorized give/take with an append-only trade log.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Boundary: OPTIONS short-circuit, JSON + CORS headers (api/boundary)
//!     ├── REST Handlers (api/handlers)
//!     │
//!     ├── AccountService / CatalogService / LedgerService (service/)
//!     ├── Rank, Direction, ProductKind, Credentials (domain/)
//!     │
//!     └── SQLite store (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
