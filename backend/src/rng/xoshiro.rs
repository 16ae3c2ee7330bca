//! xoshiro256** generator
//!
//! Blackman & Vigna's xoshiro256** 1.0: 256 bits of state, one 64-bit draw
//! per step. The state must never be all zero, since zero is a fixed point
//! of the recurrence; construction rejects it.

use serde::{Deserialize, Serialize};

use super::{ReferenceRng, RngError};

/// 64-bit left rotation, `k` in `(0, 64)`
#[inline(always)]
pub fn rotl(x: u64, k: u32) -> u64 {
    (x << k) | (x >> (64 - k))
}

/// One SplitMix64 step: advances `state` and returns the mixed output.
pub fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// xoshiro256** generator state
///
/// # Example
/// ```
/// use reference_rng_core::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::new([1, 2, 3, 4]).unwrap();
/// assert_eq!(rng.next_u64(), 11520);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Create a generator from four state words
    ///
    /// # Errors
    /// Returns [`RngError::InvalidSeed`] if all four words are zero.
    pub fn new(state: [u64; 4]) -> Result<Self, RngError> {
        if state == [0; 4] {
            return Err(RngError::InvalidSeed);
        }
        Ok(Self { s: state })
    }

    /// Expand a single 64-bit seed into the full state with SplitMix64
    pub fn from_splitmix(seed: u64) -> Result<Self, RngError> {
        let mut sm = seed;
        let state = [
            splitmix64(&mut sm),
            splitmix64(&mut sm),
            splitmix64(&mut sm),
            splitmix64(&mut sm),
        ];
        tracing::debug!(seed, "seeded xoshiro256** via SplitMix64");
        Self::new(state)
    }

    /// Generate next draw
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        let result = rotl(s[1].wrapping_mul(5), 7).wrapping_mul(9);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = rotl(s[3], 45);

        result
    }

    /// Current state words
    pub fn state(&self) -> [u64; 4] {
        self.s
    }
}

impl ReferenceRng for Xoshiro256StarStar {
    fn next_u64(&mut self) -> u64 {
        Xoshiro256StarStar::next_u64(self)
    }

    fn algorithm(&self) -> &'static str {
        "xoshiro256starstar"
    }
}

impl TryFrom<[u64; 4]> for Xoshiro256StarStar {
    type Error = RngError;

    fn try_from(state: [u64; 4]) -> Result<Self, Self::Error> {
        Self::new(state)
    }
}

impl From<Xoshiro256StarStar> for [u64; 4] {
    fn from(rng: Xoshiro256StarStar) -> Self {
        rng.s
    }
}
