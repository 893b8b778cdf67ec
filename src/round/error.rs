//! Errors raised by round operations.
//!
//! Every error leaves the session exactly as it was before the call.

use thiserror::Error;

use super::phase::Phase;

/// Why a wager was refused.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WagerViolation {
    #[error("stake {stake} exceeds balance {balance}")]
    StakeExceedsBalance { stake: u64, balance: u64 },

    #[error("cash-out multiplier {multiplier} outside [0, {max}]")]
    MultiplierOutOfRange { multiplier: f64, max: f64 },

    #[error("stake input is unset")]
    MissingStake,

    #[error("cash-out multiplier input is unset")]
    MissingMultiplier,
}

/// Round operation errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RoundError {
    #[error("invalid wager: {0}")]
    InvalidWager(#[from] WagerViolation),

    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("stop point must be finite and non-negative, got {0}")]
    InvalidStopPoint(f64),

    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),
}

impl RoundError {
    pub(crate) fn phase(operation: &'static str, phase: Phase) -> Self {
        RoundError::InvalidPhase { operation, phase }
    }
}
