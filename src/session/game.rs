//! The session aggregate.
//!
//! A [`Session`] exclusively owns the balance, the human inputs, the round
//! engine and the random source. Presentation layers drive it through
//! `start_round` / `stop_round` / `reset_round` and the read accessors; the
//! session itself never reads the clock.

use std::ops::RangeInclusive;

use tracing::{debug, info, warn};

use super::balance::Balance;
use super::input::{self, Step};
use crate::core::{
    ConfigError, GameRng, GameRngState, Participant, Roster, SessionConfig, UniformSource, Wager,
};
use crate::round::{Phase, Round, RoundEngine, RoundError, WagerViolation};
use crate::settlement::SettlementResult;

/// One player's game: balance, inputs and the table.
#[derive(Clone, Debug)]
pub struct Session<R: UniformSource = GameRng> {
    config: SessionConfig,
    balance: Balance,
    engine: RoundEngine,
    rng: R,
    human_stake: Option<u64>,
    human_multiplier: Option<f64>,
}

impl Session<GameRng> {
    /// Create a session seeded from `config.seed`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Snapshot of the random source, for replaying the synthetic draws.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: UniformSource> Session<R> {
    /// Create a session drawing synthetic wagers from `rng`.
    pub fn with_source(config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let balance = Balance::new(config.starting_balance);
        let human_stake = config
            .initial_stake
            .map(|s| s.min(balance.points()));
        let human_multiplier = config
            .initial_multiplier
            .map(|m| input::clamp_multiplier(m, config.max_multiplier));

        debug!(
            balance = balance.points(),
            synthetics = config.synthetic_count,
            "Session created"
        );

        Ok(Self {
            engine: RoundEngine::new(&config),
            config,
            balance,
            rng,
            human_stake,
            human_multiplier,
        })
    }

    // === Read accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        self.engine.round()
    }

    /// Participants in insertion order with stable ids.
    #[must_use]
    pub fn participants(&self) -> &Roster {
        self.engine.participants()
    }

    /// The human participant.
    #[must_use]
    pub fn human(&self) -> Option<&Participant> {
        self.participants().iter().find(|p| p.is_human())
    }

    #[must_use]
    pub fn stop_point(&self) -> Option<f64> {
        self.engine.stop_point()
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance.points()
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.engine.round().speed()
    }

    #[must_use]
    pub fn rounds_started(&self) -> u64 {
        self.engine.rounds_started()
    }

    #[must_use]
    pub fn human_stake(&self) -> Option<u64> {
        self.human_stake
    }

    #[must_use]
    pub fn human_multiplier(&self) -> Option<f64> {
        self.human_multiplier
    }

    /// Valid range for the next stake input.
    #[must_use]
    pub fn stake_bounds(&self) -> RangeInclusive<u64> {
        self.balance.stake_bounds()
    }

    /// Valid range for the multiplier input.
    #[must_use]
    pub fn multiplier_bounds(&self) -> RangeInclusive<f64> {
        0.0..=self.config.max_multiplier
    }

    // === Round operations ===

    /// Escrow `stake` and start a round at `cash_out_multiplier`.
    ///
    /// Starting from `Stopped` resets the previous round first. On error
    /// nothing changes.
    pub fn start_round(&mut self, stake: u64, cash_out_multiplier: f64) -> Result<(), RoundError> {
        let wager = Wager::new(stake, cash_out_multiplier);

        self.engine.check_start(&wager)?;
        if !self.balance.covers(stake) {
            return Err(WagerViolation::StakeExceedsBalance {
                stake,
                balance: self.balance.points(),
            }
            .into());
        }

        self.engine.start(wager, &mut self.rng)?;
        self.balance
            .deduct_stake(stake)
            .map_err(WagerViolation::from)?;

        self.human_stake = Some(stake);
        self.human_multiplier = Some(cash_out_multiplier);
        self.clamp_stake_input();

        info!(
            round = self.engine.rounds_started(),
            stake,
            cash_out_multiplier,
            balance = self.balance.points(),
            "Round started"
        );
        Ok(())
    }

    /// Start a round from the stored human inputs.
    pub fn start_with_inputs(&mut self) -> Result<(), RoundError> {
        let stake = self.human_stake.ok_or(WagerViolation::MissingStake)?;
        let multiplier = self
            .human_multiplier
            .ok_or(WagerViolation::MissingMultiplier)?;
        self.start_round(stake, multiplier)
    }

    /// Halt the running round at `stop_point`, settle, and credit the human.
    pub fn stop_round(&mut self, stop_point: f64) -> Result<SettlementResult, RoundError> {
        let participants = self.engine.stop(stop_point)?.clone();

        let human = participants.iter().find(|p| p.is_human());
        let human_score = human.and_then(Participant::score).unwrap_or(0);
        let cashed_out = human
            .and_then(Participant::wager)
            .is_some_and(|w| w.cashes_out_at(stop_point));

        let credited = if cashed_out { human_score } else { 0 };
        self.balance.credit_winnings(credited);
        self.clamp_stake_input();

        let result = SettlementResult {
            stop_point,
            participants,
            human_score,
            credited,
            balance_after: self.balance.points(),
        };

        info!(
            round = self.engine.rounds_started(),
            stop_point,
            human_score,
            credited,
            balance = result.balance_after,
            winners = result.winners(),
            house_delta = %result.house_delta(),
            "Round settled"
        );
        Ok(result)
    }

    /// Discard the current round. The balance is untouched, so a stake
    /// escrowed for a running round is forfeited.
    pub fn reset_round(&mut self) {
        if self.engine.phase() == Phase::Running {
            let forfeited = self.human().and_then(Participant::stake).unwrap_or(0);
            warn!(
                round = self.engine.rounds_started(),
                forfeited,
                "Running round cancelled, escrowed stake forfeited"
            );
        }
        self.engine.reset();
        debug!("Round reset");
    }

    /// Change the display speed. Locked while running.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), RoundError> {
        self.engine.set_speed(speed)
    }

    // === Human inputs ===

    /// Set or unset the stake input, clamped into `[0, balance]`.
    pub fn set_human_stake(&mut self, stake: Option<u64>) -> Result<(), RoundError> {
        self.ensure_inputs_editable("edit stake")?;
        self.human_stake = stake.map(|s| s.min(self.balance.points()));
        Ok(())
    }

    /// Set or unset the multiplier input, clamped into `[0, max]` and
    /// rounded to 2 dp. NaN leaves the previous value.
    pub fn set_human_multiplier(&mut self, multiplier: Option<f64>) -> Result<(), RoundError> {
        self.ensure_inputs_editable("edit multiplier")?;
        match multiplier {
            Some(m) if m.is_nan() => {}
            Some(m) => {
                self.human_multiplier = Some(input::clamp_multiplier(m, self.config.max_multiplier));
            }
            None => self.human_multiplier = None,
        }
        Ok(())
    }

    /// Apply raw stake text.
    pub fn apply_stake_text(&mut self, text: &str) -> Result<(), RoundError> {
        self.ensure_inputs_editable("edit stake")?;
        self.human_stake = input::parse_stake(text, self.balance.points()).apply(self.human_stake);
        Ok(())
    }

    /// Apply raw multiplier text.
    pub fn apply_multiplier_text(&mut self, text: &str) -> Result<(), RoundError> {
        self.ensure_inputs_editable("edit multiplier")?;
        self.human_multiplier = input::parse_multiplier(text, self.config.max_multiplier)
            .apply(self.human_multiplier);
        Ok(())
    }

    /// Nudge the stake input by one point. An unset input counts as 0.
    pub fn step_stake(&mut self, step: Step) -> Result<(), RoundError> {
        self.ensure_inputs_editable("edit stake")?;
        let current = self.human_stake.unwrap_or(0);
        self.human_stake = Some(input::step_stake(current, self.balance.points(), step));
        Ok(())
    }

    /// Nudge the multiplier input by 0.25. An unset input counts as 0.
    pub fn step_multiplier(&mut self, step: Step) -> Result<(), RoundError> {
        self.ensure_inputs_editable("edit multiplier")?;
        let current = self.human_multiplier.unwrap_or(0.0);
        self.human_multiplier = Some(input::step_multiplier(
            current,
            self.config.max_multiplier,
            step,
        ));
        Ok(())
    }

    fn ensure_inputs_editable(&self, operation: &'static str) -> Result<(), RoundError> {
        let phase = self.engine.phase();
        if phase.inputs_editable() {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase { operation, phase })
        }
    }

    fn clamp_stake_input(&mut self) {
        let max = self.balance.points();
        if let Some(stake) = self.human_stake.as_mut() {
            *stake = (*stake).min(max);
        }
    }
}
