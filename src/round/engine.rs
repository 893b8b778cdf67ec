//! Round state machine.
//!
//! The engine owns the roster and the current [`Round`]. It validates phase
//! and multiplier bounds, draws synthetic wagers, and settles on stop. Balance
//! checks belong to the session, which calls in here after escrowing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{RoundError, WagerViolation};
use super::phase::Phase;
use crate::core::{roster_from_config, ParticipantId, Roster, SessionConfig, UniformSource, Wager};
use crate::settlement::settle;

/// A single play cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    phase: Phase,
    stop_point: Option<f64>,
    speed: f64,
}

impl Round {
    /// A fresh idle round.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            phase: Phase::Idle,
            stop_point: None,
            speed,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Multiplier at which the round concluded; `None` until stopped.
    #[must_use]
    pub fn stop_point(&self) -> Option<f64> {
        self.stop_point
    }

    /// Display rate. Has no effect on settlement.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// Drives rounds for one roster.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: SessionConfig,
    round: Round,
    participants: Roster,
    rounds_started: u64,
}

impl RoundEngine {
    /// Build an idle engine with the roster described by `config`.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            config: config.clone(),
            round: Round::new(config.speed),
            participants: roster_from_config(config),
            rounds_started: 0,
        }
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    #[must_use]
    pub fn stop_point(&self) -> Option<f64> {
        self.round.stop_point
    }

    /// Participants in insertion order.
    #[must_use]
    pub fn participants(&self) -> &Roster {
        &self.participants
    }

    /// Rounds started since the engine was built.
    #[must_use]
    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    /// Check that `human` could start a round now.
    ///
    /// Covers the phase and multiplier bounds. Stake against balance is the
    /// session's concern.
    pub fn check_start(&self, human: &Wager) -> Result<(), RoundError> {
        if !self.round.phase.can_start() {
            return Err(RoundError::phase("start", self.round.phase));
        }
        let m = human.cash_out_multiplier;
        if !(0.0..=self.config.max_multiplier).contains(&m) {
            return Err(WagerViolation::MultiplierOutOfRange {
                multiplier: m,
                max: self.config.max_multiplier,
            }
            .into());
        }
        Ok(())
    }

    /// Start a round with the human's wager and fresh synthetic draws.
    ///
    /// Starting from `Stopped` resets first.
    pub fn start<R>(&mut self, human: Wager, rng: &mut R) -> Result<(), RoundError>
    where
        R: UniformSource + ?Sized,
    {
        self.check_start(&human)?;

        if self.round.phase == Phase::Stopped {
            self.reset();
        }

        for participant in self.participants.iter_mut() {
            let wager = if participant.id() == ParticipantId::HUMAN {
                human
            } else {
                Wager::draw_synthetic(rng, &self.config)
            };
            participant.place(wager);
        }

        self.round.phase = Phase::Running;
        self.rounds_started += 1;

        debug!(
            round = self.rounds_started,
            participants = self.participants.len(),
            "Round running"
        );
        Ok(())
    }

    /// Halt the round at `stop_point` and settle every participant.
    ///
    /// Returns the settled roster.
    pub fn stop(&mut self, stop_point: f64) -> Result<&Roster, RoundError> {
        if self.round.phase != Phase::Running {
            return Err(RoundError::phase("stop", self.round.phase));
        }
        if !(stop_point.is_finite() && stop_point >= 0.0) {
            return Err(RoundError::InvalidStopPoint(stop_point));
        }

        self.participants = settle(&self.participants, stop_point);
        self.round.stop_point = Some(stop_point);
        self.round.phase = Phase::Stopped;

        debug!(round = self.rounds_started, stop_point, "Round stopped");
        Ok(&self.participants)
    }

    /// Discard the round: clear every wager and score, back to `Idle`.
    ///
    /// Valid from any phase. Calling it twice is the same as calling it once.
    pub fn reset(&mut self) {
        for participant in self.participants.iter_mut() {
            participant.clear();
        }
        self.round = Round::new(self.round.speed);
    }

    /// Change the display speed. Locked while running.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), RoundError> {
        if self.round.phase == Phase::Running {
            return Err(RoundError::phase("change speed", self.round.phase));
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(RoundError::InvalidSpeed(speed));
        }
        self.round.speed = speed;
        Ok(())
    }
}
