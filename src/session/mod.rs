//! Session bookkeeping: the balance, the human inputs, and the aggregate
//! that ties them to the round engine.
//!
//! ## Example
//!
//! ```
//! use rust_crash::core::SessionConfig;
//! use rust_crash::round::Phase;
//! use rust_crash::session::Session;
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//!
//! session.start_round(50, 2.0).unwrap();
//! assert_eq!(session.balance(), 950);
//!
//! // The driver decides where the multiplier halted
//! let result = session.stop_round(3.0).unwrap();
//! assert_eq!(result.human_score, 100);
//! assert_eq!(session.balance(), 1050);
//! assert_eq!(session.phase(), Phase::Stopped);
//! ```

mod balance;
mod game;
pub mod input;

pub use balance::{Balance, BalanceError};
pub use game::Session;
pub use input::{FieldInput, Step};
