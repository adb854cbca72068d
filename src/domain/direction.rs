//! Direction of a manager-initiated coin movement.

use std::fmt;

use crate::error::FestivalError;

/// Give credits the target, take debits it.
///
/// The manager's own user account is always the other side of the trade
/// log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coins flow from the manager to the target.
    Give,
    /// Coins flow from the target to the manager.
    Take,
}

impl Direction {
    /// Signed trade log value for `coins` moved in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::BalanceOverflow`] when `coins` cannot be
    /// negated (only `i64::MIN` on take).
    pub fn signed(self, coins: i64) -> Result<i64, FestivalError> {
        match self {
            Self::Give => Ok(coins),
            Self::Take => coins
                .checked_neg()
                .ok_or(FestivalError::BalanceOverflow {
                    balance: 0,
                    op: '-',
                    coins,
                }),
        }
    }

    /// Balance after applying `coins` to `balance`.
    ///
    /// No lower bound is enforced; balances may go negative.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::BalanceOverflow`] on `i64` overflow.
    pub fn apply(self, balance: i64, coins: i64) -> Result<i64, FestivalError> {
        let next = match self {
            Self::Give => balance.checked_add(coins),
            Self::Take => balance.checked_sub(coins),
        };
        next.ok_or(FestivalError::BalanceOverflow {
            balance,
            op: self.op(),
            coins,
        })
    }

    /// Orders `(from, to)` for the trade log given the manager's user
    /// uuid and the target's uuid.
    #[must_use]
    pub fn counterparties<'a>(self, manager: &'a str, target: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::Give => (manager, target),
            Self::Take => (target, manager),
        }
    }

    const fn op(self) -> char {
        match self {
            Self::Give => '+',
            Self::Take => '-',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Give => f.write_str("give"),
            Self::Take => f.write_str("take"),
        }
    }
}
