//! Ranking position labels.

use serde::Serialize;

static MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Position of a user in the coin ranking.
///
/// Serializes untagged: medals as JSON strings, later places as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rank {
    /// Gold, silver or bronze glyph for the first three places.
    Medal(&'static str),
    /// One-based place from the fourth entry on.
    Place(usize),
}

impl Rank {
    /// Returns the label for the zero-based position `index`.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        match MEDALS.get(index).copied() {
            Some(glyph) => Self::Medal(glyph),
            None => Self::Place(index.saturating_add(1)),
        }
    }
}
