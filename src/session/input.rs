//! Validation helpers for the human's stake and multiplier inputs.
//!
//! Text input follows three rules: empty text unsets the field, text that is
//! not a number is ignored, and numbers outside the allowed range are clamped
//! rather than rejected.

use serde::{Deserialize, Serialize};

use crate::core::round_to_cents;

/// Increment used by the stake step controls.
pub const STAKE_STEP: u64 = 1;

/// Increment used by the multiplier step controls.
pub const MULTIPLIER_STEP: f64 = 0.25;

/// Result of interpreting raw input text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldInput<T> {
    /// A valid (clamped) value.
    Set(T),
    /// Empty input: the field becomes unset.
    Unset,
    /// Not a number: keep the previous value.
    Ignored,
}

impl<T: Copy> FieldInput<T> {
    /// Apply to a field's previous value.
    #[must_use]
    pub fn apply(self, previous: Option<T>) -> Option<T> {
        match self {
            FieldInput::Set(v) => Some(v),
            FieldInput::Unset => None,
            FieldInput::Ignored => previous,
        }
    }
}

/// Direction of a step control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Up,
    Down,
}

fn parse_number(text: &str) -> Option<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(Some(v)),
        _ => None,
    }
}

/// Clamp a stake into `[0, balance]`, rounded to whole points.
#[must_use]
pub fn clamp_stake(value: f64, balance: u64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= balance as f64 {
        balance
    } else {
        rounded as u64
    }
}

/// Clamp a multiplier into `[0, max]`, rounded to 2 decimal places.
#[must_use]
pub fn clamp_multiplier(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    round_to_cents(value.clamp(0.0, max)).clamp(0.0, max)
}

/// Interpret stake text against the current balance.
#[must_use]
pub fn parse_stake(text: &str, balance: u64) -> FieldInput<u64> {
    match parse_number(text) {
        None => FieldInput::Ignored,
        Some(None) => FieldInput::Unset,
        Some(Some(v)) => FieldInput::Set(clamp_stake(v, balance)),
    }
}

/// Interpret multiplier text against the maximum multiplier.
#[must_use]
pub fn parse_multiplier(text: &str, max: f64) -> FieldInput<f64> {
    match parse_number(text) {
        None => FieldInput::Ignored,
        Some(None) => FieldInput::Unset,
        Some(Some(v)) => FieldInput::Set(clamp_multiplier(v, max)),
    }
}

/// Move a stake one step, staying within `[0, balance]`.
#[must_use]
pub fn step_stake(current: u64, balance: u64, step: Step) -> u64 {
    match step {
        Step::Up if current < balance => current.saturating_add(STAKE_STEP).min(balance),
        Step::Down if current > 0 => current.saturating_sub(STAKE_STEP).min(balance),
        _ => current.min(balance),
    }
}

/// Move a multiplier one step, staying within `[0, max]`.
#[must_use]
pub fn step_multiplier(current: f64, max: f64, step: Step) -> f64 {
    let next = match step {
        Step::Up if current < max => current + MULTIPLIER_STEP,
        Step::Down if current > 0.0 => current - MULTIPLIER_STEP,
        _ => current,
    };
    clamp_multiplier(next, max)
}
