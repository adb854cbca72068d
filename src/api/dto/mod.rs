//! Data Transfer Objects for REST request/response serialization.
//!
//! Response views deliberately leave out secrets: only registration
//! echoes the bearer token.

pub mod account_dto;
pub mod catalog_dto;
pub mod ledger_dto;

pub use account_dto::*;
pub use catalog_dto::*;
pub use ledger_dto::*;
