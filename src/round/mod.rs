//! Round lifecycle: phases, the state machine, and its errors.

mod engine;
mod error;
mod phase;

pub use engine::{Round, RoundEngine};
pub use error::{RoundError, WagerViolation};
pub use phase::Phase;
