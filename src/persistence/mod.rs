//! Persistence layer: the relational store behind every handler.
//!
//! Rows are decoded into the typed structs in [`models`]; every query
//! names its columns so an unexpected table shape fails with a decode
//! error instead of a silently missing field. [`sqlite::SqliteStore`] is
//! the only storage capability and is handed to services explicitly.

pub mod models;
pub mod sqlite;

pub use sqlite::SqliteStore;
