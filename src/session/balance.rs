//! The human's point balance.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::round::WagerViolation;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u64, available: u64 },
}

impl From<BalanceError> for WagerViolation {
    fn from(err: BalanceError) -> Self {
        match err {
            BalanceError::InsufficientBalance {
                requested,
                available,
            } => WagerViolation::StakeExceedsBalance {
                stake: requested,
                balance: available,
            },
        }
    }
}

/// Points carried across rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    points: u64,
}

impl Balance {
    #[must_use]
    pub const fn new(points: u64) -> Self {
        Self { points }
    }

    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Can `amount` be escrowed?
    #[must_use]
    pub const fn covers(&self, amount: u64) -> bool {
        amount <= self.points
    }

    /// Escrow a stake.
    pub fn deduct_stake(&mut self, amount: u64) -> Result<(), BalanceError> {
        if !self.covers(amount) {
            return Err(BalanceError::InsufficientBalance {
                requested: amount,
                available: self.points,
            });
        }
        self.points -= amount;
        Ok(())
    }

    /// Add winnings. No upper bound beyond `u64::MAX`.
    pub fn credit_winnings(&mut self, amount: u64) {
        self.points = self.points.saturating_add(amount);
    }

    /// Valid range for the next stake.
    #[must_use]
    pub fn stake_bounds(&self) -> RangeInclusive<u64> {
        0..=self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduct_and_credit() {
        let mut balance = Balance::new(1000);

        balance.deduct_stake(50).unwrap();
        assert_eq!(balance.points(), 950);

        balance.credit_winnings(100);
        assert_eq!(balance.points(), 1050);
        assert_eq!(balance.stake_bounds(), 0..=1050);
    }

    #[test]
    fn test_deduct_exact_balance() {
        let mut balance = Balance::new(1000);
        balance.deduct_stake(1000).unwrap();
        assert_eq!(balance.points(), 0);
        assert_eq!(balance.stake_bounds(), 0..=0);
    }

    #[test]
    fn test_insufficient_balance_leaves_points() {
        let mut balance = Balance::new(10);
        let err = balance.deduct_stake(11).unwrap_err();

        assert_eq!(
            err,
            BalanceError::InsufficientBalance {
                requested: 11,
                available: 10
            }
        );
        assert_eq!(balance.points(), 10);
        assert_eq!(
            WagerViolation::from(err),
            WagerViolation::StakeExceedsBalance {
                stake: 11,
                balance: 10
            }
        );
    }

    #[test]
    fn test_credit_saturates() {
        let mut balance = Balance::new(u64::MAX - 1);
        balance.credit_winnings(10);
        assert_eq!(balance.points(), u64::MAX);
    }
}
