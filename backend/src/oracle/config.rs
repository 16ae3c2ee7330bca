//! Stream configuration
//!
//! JSON-friendly description of "which generator, which seed, which draws".
//!
//! # Example
//! ```
//! use reference_rng_core::oracle::StreamConfig;
//!
//! let config: StreamConfig = serde_json::from_str(r#"{
//!     "generator": { "algorithm": "mt19937_64", "seed": 5489 },
//!     "draw": "real_half_open01",
//!     "count": 4
//! }"#).unwrap();
//! assert_eq!(config.skip, 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::OracleError;

/// Generator algorithm and seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum GeneratorConfig {
    /// MT19937-64 seeded from one word (`init_genrand64`)
    #[serde(rename = "mt19937_64")]
    Mt19937_64 { seed: u64 },

    /// MT19937-64 seeded from a key (`init_by_array64`)
    #[serde(rename = "mt19937_64_array")]
    Mt19937_64Array { key: Vec<u64> },

    /// xoshiro256** with explicit state words
    #[serde(rename = "xoshiro256starstar")]
    Xoshiro256StarStar { state: [u64; 4] },

    /// xoshiro256** with state expanded from one word by SplitMix64
    #[serde(rename = "xoshiro256starstar_splitmix")]
    Xoshiro256StarStarSplitMix { seed: u64 },
}

impl GeneratorConfig {
    /// Canonical algorithm name of the generator this config builds
    pub fn algorithm(&self) -> &'static str {
        match self {
            GeneratorConfig::Mt19937_64 { .. } | GeneratorConfig::Mt19937_64Array { .. } => {
                "mt19937_64"
            }
            GeneratorConfig::Xoshiro256StarStar { .. }
            | GeneratorConfig::Xoshiro256StarStarSplitMix { .. } => "xoshiro256starstar",
        }
    }

    pub fn supports(&self, draw: DrawKind) -> bool {
        match self {
            GeneratorConfig::Mt19937_64 { .. } | GeneratorConfig::Mt19937_64Array { .. } => true,
            GeneratorConfig::Xoshiro256StarStar { .. }
            | GeneratorConfig::Xoshiro256StarStarSplitMix { .. } => draw == DrawKind::U64,
        }
    }
}

/// Kind of value extracted per draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    /// Raw 64-bit word
    #[default]
    U64,
    /// 64-bit word shifted right by one, as a signed integer
    I63,
    /// Float in [0, 1]
    RealClosed01,
    /// Float in [0, 1)
    RealHalfOpen01,
    /// Float in (0, 1)
    RealOpen01,
}

impl DrawKind {
    pub const ALL: [DrawKind; 5] = [
        DrawKind::U64,
        DrawKind::I63,
        DrawKind::RealClosed01,
        DrawKind::RealHalfOpen01,
        DrawKind::RealOpen01,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawKind::U64 => "u64",
            DrawKind::I63 => "i63",
            DrawKind::RealClosed01 => "real_closed01",
            DrawKind::RealHalfOpen01 => "real_half_open01",
            DrawKind::RealOpen01 => "real_open01",
        }
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DrawKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown draw kind '{}'", s))
    }
}

/// A reproducible stream of draws
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub draw: DrawKind,

    /// Number of draws to collect
    pub count: usize,

    /// Draws discarded before collection starts
    #[serde(default)]
    pub skip: usize,
}

impl StreamConfig {
    pub fn new(generator: GeneratorConfig, draw: DrawKind, count: usize) -> Self {
        Self {
            generator,
            draw,
            count,
            skip: 0,
        }
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Parse a stream config from JSON
    pub fn from_json(json: &str) -> Result<Self, OracleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the draw kind applies to the generator
    pub fn validate(&self) -> Result<(), OracleError> {
        if !self.generator.supports(self.draw) {
            return Err(OracleError::UnsupportedDraw {
                algorithm: self.generator.algorithm(),
                draw: self.draw,
            });
        }
        Ok(())
    }
}
