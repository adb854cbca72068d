//! Domain layer: festival value types with no storage or HTTP concerns.
//!
//! - [`Credentials`]: freshly generated user identifier and bearer token.
//! - [`Rank`]: medal-or-number position in the coin ranking.
//! - [`ProductKind`]: buy/sell discriminator of catalog rows.
//! - [`Direction`]: sign and counterparty rules of a give/take transfer.

pub mod credentials;
pub mod direction;
pub mod product_kind;
pub mod rank;

pub use credentials::Credentials;
pub use direction::Direction;
pub use product_kind::ProductKind;
pub use rank::Rank;
