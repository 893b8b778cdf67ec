//! Table rows for the "current round" and "ranking" views.

use serde::{Deserialize, Serialize};

use crate::core::{Participant, UniformSource};
use crate::round::Phase;
use crate::session::Session;
use crate::settlement::rank;

/// Shown in place of any absent value.
pub const PLACEHOLDER: &str = "-";

/// Highlight for a current-round row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowTone {
    /// Round not stopped yet, no wager, or multiplier equal to the stop point.
    Neutral,
    /// Stopped above the participant's multiplier.
    Win,
    /// Stopped below the participant's multiplier.
    Loss,
}

/// One line of the current-round table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRow {
    pub name: String,
    pub stake: String,
    pub multiplier: String,
    pub tone: RowTone,
}

/// One line of the ranking table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    /// 1-based position.
    pub position: usize,
    pub name: String,
    pub score: String,
}

fn or_placeholder<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

fn tone(participant: &Participant, stop_point: Option<f64>) -> RowTone {
    match (stop_point, participant.cash_out_multiplier()) {
        (Some(stop), Some(m)) if stop > m => RowTone::Win,
        (Some(stop), Some(m)) if stop < m => RowTone::Loss,
        _ => RowTone::Neutral,
    }
}

/// Rows for the current round, in seat order.
pub fn current_round_rows<R: UniformSource>(session: &Session<R>) -> Vec<RoundRow> {
    let stop_point = match session.phase() {
        Phase::Stopped => session.stop_point(),
        _ => None,
    };

    session
        .participants()
        .iter()
        .map(|p| RoundRow {
            name: p.name().to_string(),
            stake: or_placeholder(p.stake()),
            multiplier: or_placeholder(p.cash_out_multiplier()),
            tone: tone(p, stop_point),
        })
        .collect()
}

/// Rows for the leaderboard. Names stay hidden until the round has stopped.
pub fn ranking_rows<R: UniformSource>(session: &Session<R>) -> Vec<RankingRow> {
    let reveal = session.phase() == Phase::Stopped;

    rank(session.participants())
        .into_iter()
        .enumerate()
        .map(|(i, p)| RankingRow {
            position: i + 1,
            name: if reveal {
                p.name().to_string()
            } else {
                PLACEHOLDER.to_string()
            },
            score: or_placeholder(p.score()),
        })
        .collect()
}
