//! Product listing discriminator.

/// Whether a catalog row is something users buy or something they sell.
///
/// Stored in the `type` column of `Products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Listed for purchase with coins.
    Buy,
    /// Listed for sale in exchange for coins.
    Sell,
}

impl ProductKind {
    /// Column value for this kind.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Buy => 0,
            Self::Sell => 1,
        }
    }
}
