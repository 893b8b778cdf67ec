//! Settlement: converting a stop point into scores.
//!
//! [`settle`] is a pure function over a roster; the session applies its
//! result to the balance. [`rank`] is the read-only leaderboard order.

mod ranking;
mod settle;

pub use ranking::rank;
pub use settle::{score_for, settle, SettlementResult};
