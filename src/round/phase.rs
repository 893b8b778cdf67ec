//! Round lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where a round is in its lifecycle.
///
/// ```text
/// Idle --start--> Running --stop--> Stopped
///   ^                |                 |
///   +-----reset------+-------reset-----+
/// ```
///
/// `start` from `Stopped` resets implicitly first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No active wagers.
    #[default]
    Idle,
    /// Multiplier advancing, wagers locked.
    Running,
    /// Final multiplier shown, wagers locked until reset.
    Stopped,
}

impl Phase {
    /// Can a new round start from here?
    #[must_use]
    pub fn can_start(self) -> bool {
        matches!(self, Phase::Idle | Phase::Stopped)
    }

    /// Are the human inputs editable?
    #[must_use]
    pub fn inputs_editable(self) -> bool {
        self != Phase::Running
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}
