//! Participants and their per-round wagers.
//!
//! ## ParticipantId
//!
//! Type-safe participant identifier. Ids are 0-based and assigned in
//! insertion order; the human always holds [`ParticipantId::HUMAN`].
//!
//! ## Wager
//!
//! A stake paired with a cash-out multiplier. A participant holds
//! `Option<Wager>`, so the two values are always present or absent together.

use serde::{Deserialize, Serialize};

use super::config::SessionConfig;
use super::rng::UniformSource;

/// Participant identifier supporting up to 255 participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u8);

impl ParticipantId {
    /// The human-controlled participant.
    pub const HUMAN: ParticipantId = ParticipantId(0);

    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw participant index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

/// Who drives a participant's wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantKind {
    /// Wager chosen through the session inputs.
    Human,
    /// Wager drawn from the random source each round.
    Synthetic,
}

/// Points wagered and the multiplier at which the participant exits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    pub stake: u64,
    pub cash_out_multiplier: f64,
}

impl Wager {
    #[must_use]
    pub const fn new(stake: u64, cash_out_multiplier: f64) -> Self {
        Self {
            stake,
            cash_out_multiplier,
        }
    }

    /// Draw a synthetic wager.
    ///
    /// The stake is a whole number uniform over the configured stake range and
    /// the multiplier is uniform over `[0, max_multiplier]`, rounded to 2 dp.
    pub fn draw_synthetic<R: UniformSource + ?Sized>(rng: &mut R, config: &SessionConfig) -> Self {
        let min = config.synthetic_stake_min;
        let max = config.synthetic_stake_max;
        let raw = rng.draw_uniform(min as f64, max as f64 + 1.0).floor();
        let stake = (raw as u64).clamp(min, max);

        let multiplier = round_to_cents(rng.draw_uniform(0.0, config.max_multiplier));

        Self::new(stake, multiplier.clamp(0.0, config.max_multiplier))
    }

    /// Did this wager exit before the round stopped?
    ///
    /// Strict: a multiplier equal to the stop point did not make it out.
    #[must_use]
    pub fn cashes_out_at(&self, stop_point: f64) -> bool {
        stop_point > self.cash_out_multiplier
    }

    /// Payout if the wager cashes out, rounded to whole points.
    #[must_use]
    pub fn payout(&self) -> u64 {
        let raw = self.stake as f64 * self.cash_out_multiplier;
        if raw.is_finite() && raw > 0.0 {
            raw.round() as u64
        } else {
            0
        }
    }
}

/// Round a multiplier to 2 decimal places.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    kind: ParticipantKind,
    wager: Option<Wager>,
    score: Option<u64>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>, kind: ParticipantKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            wager: None,
            score: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == ParticipantKind::Human
    }

    #[must_use]
    pub fn wager(&self) -> Option<&Wager> {
        self.wager.as_ref()
    }

    #[must_use]
    pub fn stake(&self) -> Option<u64> {
        self.wager.map(|w| w.stake)
    }

    #[must_use]
    pub fn cash_out_multiplier(&self) -> Option<f64> {
        self.wager.map(|w| w.cash_out_multiplier)
    }

    /// Settled payout of the last completed round.
    #[must_use]
    pub fn score(&self) -> Option<u64> {
        self.score
    }

    pub(crate) fn place(&mut self, wager: Wager) {
        self.wager = Some(wager);
        self.score = None;
    }

    pub(crate) fn set_score(&mut self, score: u64) {
        self.score = Some(score);
    }

    /// Drop the wager and score.
    pub(crate) fn clear(&mut self) {
        self.wager = None;
        self.score = None;
    }
}

/// Participants in insertion order.
///
/// Backed by `im::Vector` so settlement can hand out a new roster while the
/// previous one stays cheap to keep around.
pub type Roster = im::Vector<Participant>;

/// Build the starting roster: the human first, then the synthetics.
pub fn roster_from_config(config: &SessionConfig) -> Roster {
    let mut roster = Roster::new();
    roster.push_back(Participant::new(
        ParticipantId::HUMAN,
        config.human_name.clone(),
        ParticipantKind::Human,
    ));
    for n in 1..=config.synthetic_count {
        roster.push_back(Participant::new(
            ParticipantId::new(n),
            format!("{} {}", config.synthetic_name_prefix, n),
            ParticipantKind::Synthetic,
        ));
    }
    roster
}
