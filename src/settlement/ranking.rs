//! Ranking projection for the leaderboard.

use std::cmp::Ordering;

use crate::core::Participant;

/// Order participants for display: unsettled first, then by score descending.
///
/// Ties keep insertion order. Scores are only read.
pub fn rank<'a, I>(participants: I) -> Vec<&'a Participant>
where
    I: IntoIterator<Item = &'a Participant>,
{
    let mut ranked: Vec<&Participant> = participants.into_iter().collect();
    ranked.sort_by(|a, b| compare_scores(a.score(), b.score()));
    ranked
}

fn compare_scores(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => y.cmp(&x),
    }
}
