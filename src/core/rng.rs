//! Random sources for synthetic participants and simulated stop points.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the [`UniformSource`] trait, so
//!   tests and drivers can substitute a scripted sequence
//! - **Deterministic**: [`GameRng`] with the same seed produces the same draws
//! - **Context streams**: independent sequences for different purposes
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_crash::core::{GameRng, UniformSource};
//!
//! let mut rng = GameRng::new(42);
//! let x = rng.draw_uniform(0.0, 10.0);
//! assert!((0.0..10.0).contains(&x));
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.draw_uniform(0.0, 10.0), x);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A source of uniformly distributed values.
///
/// This is the only randomness capability the engine depends on.
pub trait UniformSource {
    /// Draw a value uniformly from `[low, high)`.
    ///
    /// Returns `low` when the range is empty or unbounded.
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).draw_uniform(low, high)
    }
}

impl<T: UniformSource + ?Sized> UniformSource for Box<T> {
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).draw_uniform(low, high)
    }
}

/// Deterministic seedable RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The simulation driver uses this to keep stop-point draws apart from
    /// the synthetic wager draws made by the session.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl UniformSource for GameRng {
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64 {
        if !(high > low) || !low.is_finite() || !high.is_finite() {
            return low;
        }
        self.inner.gen_range(low..high)
    }
}

/// Serializable RNG state for replaying a session's draws.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of unit fractions.
///
/// Each queued value `u` in `[0, 1)` maps to `low + u * (high - low)`.
/// Once the queue is exhausted every draw returns `low`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    fractions: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            fractions: fractions.into_iter().collect(),
        }
    }

    /// Number of fractions not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.fractions.len()
    }
}

impl UniformSource for ScriptedSource {
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64 {
        let u = self.fractions.pop_front().unwrap_or(0.0).clamp(0.0, 1.0);
        if !(high > low) {
            return low;
        }
        low + u * (high - low)
    }
}
