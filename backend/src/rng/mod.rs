//! Reference random number generators
//!
//! Bit-exact implementations of two literature-defined PRNGs:
//!
//! - **MT19937-64**: 64-bit Mersenne Twister (Nishimura & Matsumoto, 2004)
//! - **xoshiro256\*\***: Blackman & Vigna's 256-bit all-purpose generator
//!
//! Both reproduce the published output streams seed for seed. They exist to
//! act as oracles for a faster random facility, so neither is cryptographically
//! secure and neither is synchronised: each instance is plain mutable state
//! owned by exactly one caller.

mod mt19937_64;
mod xoshiro;

pub use mt19937_64::{Mt19937_64, MtSnapshot, MT_DEFAULT_SEED, MT_STATE_WORDS};
pub use xoshiro::{rotl, splitmix64, Xoshiro256StarStar};

use thiserror::Error;

/// Errors raised while constructing or restoring a generator.
///
/// Extraction itself is total; every failure happens at the construction
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// xoshiro256** seeded with four zero words (a fixed point of the recurrence)
    #[error("Invalid seed: xoshiro256** state must not be all zero")]
    InvalidSeed,

    /// MT19937-64 array seeding requires at least one key word
    #[error("Invalid seed: MT19937-64 seed key must contain at least one word")]
    EmptyKey,

    #[error("Invalid snapshot: expected {expected} state words, got {actual}")]
    StateLength { expected: usize, actual: usize },

    #[error("Invalid snapshot: index {index} exceeds {max}")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("Invalid snapshot: state words are all zero")]
    ZeroState,
}

/// A generator usable as a black-box oracle.
///
/// Collaborators only ever need the raw 64-bit stream; derived draws are
/// specific to each algorithm.
pub trait ReferenceRng {
    /// Advance the state and return the next 64-bit draw.
    fn next_u64(&mut self) -> u64;

    /// Canonical algorithm name, as used in stream configuration.
    fn algorithm(&self) -> &'static str;

    /// Collect the next `count` draws.
    fn take_u64(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.next_u64()).collect()
    }
}
