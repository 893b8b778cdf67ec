//! Score computation for a stopped round.

use serde::{Deserialize, Serialize};

use crate::core::{Participant, ParticipantId, Roster, Wager};

/// Score for a single wager at the given stop point.
///
/// `round(stake * multiplier)` when the stop point is strictly above the
/// multiplier, `0` otherwise or when there is no wager.
#[must_use]
pub fn score_for(wager: Option<&Wager>, stop_point: f64) -> u64 {
    match wager {
        Some(w) if w.cashes_out_at(stop_point) => w.payout(),
        _ => 0,
    }
}

/// Settle every participant against `stop_point`.
///
/// Pure: the input roster is untouched and a new roster with scores set is
/// returned in the same order.
#[must_use]
pub fn settle(participants: &Roster, stop_point: f64) -> Roster {
    participants
        .iter()
        .map(|p| {
            let mut settled = p.clone();
            settled.set_score(score_for(p.wager(), stop_point));
            settled
        })
        .collect()
}

/// Outcome of stopping a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Where the multiplier halted.
    pub stop_point: f64,
    /// Roster with every score set.
    pub participants: Roster,
    /// The human's settled score.
    pub human_score: u64,
    /// Points credited to the balance by this settlement.
    pub credited: u64,
    /// Balance after the credit.
    pub balance_after: u64,
}

impl SettlementResult {
    /// Score of a given participant.
    #[must_use]
    pub fn score_of(&self, id: ParticipantId) -> Option<u64> {
        self.participants
            .iter()
            .find(|p| p.id() == id)
            .and_then(Participant::score)
    }

    /// Sum of all stakes placed this round.
    #[must_use]
    pub fn total_staked(&self) -> u64 {
        self.participants.iter().filter_map(Participant::stake).sum()
    }

    /// Sum of all payouts.
    #[must_use]
    pub fn total_paid(&self) -> u64 {
        self.participants.iter().filter_map(Participant::score).sum()
    }

    /// House gain (positive) or loss (negative) across the whole table.
    #[must_use]
    pub fn house_delta(&self) -> i128 {
        i128::from(self.total_staked()) - i128::from(self.total_paid())
    }

    /// Number of participants who cashed out before the stop.
    #[must_use]
    pub fn winners(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.wager().is_some_and(|w| w.cashes_out_at(self.stop_point)))
            .count()
    }
}
