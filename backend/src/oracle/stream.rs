//! Stream extraction

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DrawKind, GeneratorConfig, OracleError, StreamConfig};
use crate::rng::{Mt19937_64, ReferenceRng, RngError, Xoshiro256StarStar};

/// One extracted value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Draw {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl Draw {
    /// Little-endian 8-byte encoding (floats by bit pattern)
    pub fn to_le_bytes(self) -> [u8; 8] {
        match self {
            Draw::U64(v) => v.to_le_bytes(),
            Draw::I64(v) => v.to_le_bytes(),
            Draw::F64(v) => v.to_bits().to_le_bytes(),
        }
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Draw::U64(v) => write!(f, "{}", v),
            Draw::I64(v) => write!(f, "{}", v),
            // Shortest representation that round-trips exactly
            Draw::F64(v) => write!(f, "{:?}", v),
        }
    }
}

/// A generator built from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceGenerator {
    Mt(Box<Mt19937_64>),
    Xoshiro(Xoshiro256StarStar),
}

impl ReferenceGenerator {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, RngError> {
        let generator = match config {
            GeneratorConfig::Mt19937_64 { seed } => {
                ReferenceGenerator::Mt(Box::new(Mt19937_64::new(*seed)))
            }
            GeneratorConfig::Mt19937_64Array { key } => {
                ReferenceGenerator::Mt(Box::new(Mt19937_64::from_key(key)?))
            }
            GeneratorConfig::Xoshiro256StarStar { state } => {
                ReferenceGenerator::Xoshiro(Xoshiro256StarStar::new(*state)?)
            }
            GeneratorConfig::Xoshiro256StarStarSplitMix { seed } => {
                ReferenceGenerator::Xoshiro(Xoshiro256StarStar::from_splitmix(*seed)?)
            }
        };
        Ok(generator)
    }

    /// Extract one draw of the given kind
    pub fn next_draw(&mut self, kind: DrawKind) -> Result<Draw, OracleError> {
        let draw = match (self, kind) {
            (ReferenceGenerator::Mt(mt), DrawKind::U64) => Draw::U64(mt.next_u64()),
            (ReferenceGenerator::Mt(mt), DrawKind::I63) => Draw::I64(mt.next_i63()),
            (ReferenceGenerator::Mt(mt), DrawKind::RealClosed01) => {
                Draw::F64(mt.next_real_closed01())
            }
            (ReferenceGenerator::Mt(mt), DrawKind::RealHalfOpen01) => {
                Draw::F64(mt.next_real_half_open01())
            }
            (ReferenceGenerator::Mt(mt), DrawKind::RealOpen01) => {
                Draw::F64(mt.next_real_open01())
            }
            (ReferenceGenerator::Xoshiro(x), DrawKind::U64) => Draw::U64(x.next_u64()),
            (generator, draw) => {
                return Err(OracleError::UnsupportedDraw {
                    algorithm: generator.algorithm(),
                    draw,
                })
            }
        };
        Ok(draw)
    }
}

impl ReferenceRng for ReferenceGenerator {
    fn next_u64(&mut self) -> u64 {
        match self {
            ReferenceGenerator::Mt(mt) => mt.next_u64(),
            ReferenceGenerator::Xoshiro(x) => x.next_u64(),
        }
    }

    fn algorithm(&self) -> &'static str {
        match self {
            ReferenceGenerator::Mt(mt) => mt.algorithm(),
            ReferenceGenerator::Xoshiro(x) => x.algorithm(),
        }
    }
}

/// Generate the stream described by `config`
///
/// # Example
/// ```
/// use reference_rng_core::oracle::{generate_stream, Draw, DrawKind, GeneratorConfig, StreamConfig};
///
/// let config = StreamConfig::new(
///     GeneratorConfig::Xoshiro256StarStar { state: [1, 2, 3, 4] },
///     DrawKind::U64,
///     3,
/// );
/// let draws = generate_stream(&config).unwrap();
/// assert_eq!(draws, vec![Draw::U64(11520), Draw::U64(0), Draw::U64(1509978240)]);
/// ```
pub fn generate_stream(config: &StreamConfig) -> Result<Vec<Draw>, OracleError> {
    config.validate()?;
    let mut generator = ReferenceGenerator::from_config(&config.generator)?;

    for _ in 0..config.skip {
        generator.next_draw(config.draw)?;
    }

    tracing::debug!(
        algorithm = generator.algorithm(),
        draw = %config.draw,
        skip = config.skip,
        count = config.count,
        "generating reference stream"
    );

    (0..config.count)
        .map(|_| generator.next_draw(config.draw))
        .collect()
}
