//! Read-only projections for a presentation layer.
//!
//! Absent values render as [`PLACEHOLDER`]. Nothing here mutates a session.

mod rows;

pub use rows::{current_round_rows, ranking_rows, RankingRow, RoundRow, RowTone, PLACEHOLDER};
