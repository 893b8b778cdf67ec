//! # rust-crash
//!
//! Round engine for a crash-style betting game: a multiplier climbs from a
//! baseline, every participant has chosen a cash-out multiplier, and the round
//! halts at an unpredictable stop point. Participants whose multiplier lies
//! strictly below the stop point are paid `stake * multiplier`.
//!
//! ## Design Principles
//!
//! 1. **Explicit aggregate**: all state lives in a [`Session`] owned by the
//!    caller. There is no global store.
//!
//! 2. **Injected randomness**: synthetic opponents draw their wagers from a
//!    [`UniformSource`]. [`GameRng`] is seedable and deterministic; tests can
//!    use [`ScriptedSource`].
//!
//! 3. **Caller owns time**: the engine never reads the clock. A driver decides
//!    when the multiplier halts and calls [`Session::stop_round`].
//!
//! ## Modules
//!
//! - `core`: participants, wagers, random sources, configuration
//! - `settlement`: pure scoring and the ranking projection
//! - `round`: phase state machine and its errors
//! - `session`: balance bookkeeping, input helpers, the session aggregate
//! - `display`: table rows for a presentation layer

pub mod core;
pub mod display;
pub mod round;
pub mod session;
pub mod settlement;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, GameRngState, Participant, ParticipantId, ParticipantKind, Roster,
    ScriptedSource, SessionConfig, UniformSource, Wager,
};

pub use crate::round::{Phase, Round, RoundEngine, RoundError, WagerViolation};

pub use crate::settlement::{rank, score_for, settle, SettlementResult};

pub use crate::session::{Balance, BalanceError, FieldInput, Session, Step};
