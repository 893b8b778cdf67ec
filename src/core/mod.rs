//! Core types: participants, wagers, random sources, configuration.
//!
//! Everything above this module (settlement, rounds, sessions) is built from
//! these pieces.

pub mod config;
pub mod participant;
pub mod rng;

pub use config::{ConfigError, SessionConfig};
pub use participant::{
    round_to_cents, roster_from_config, Participant, ParticipantId, ParticipantKind, Roster, Wager,
};
pub use rng::{GameRng, GameRngState, ScriptedSource, UniformSource};
