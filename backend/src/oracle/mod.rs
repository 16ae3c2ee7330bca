//! Oracle harness
//!
//! Builds reference generators from serde configuration, extracts streams of
//! draws, and checks them against published reference vectors. An external
//! random facility is validated by generating the same `StreamConfig` on
//! both sides and comparing draws (or their digests) for exact equality.

pub mod config;
pub mod digest;
pub mod stream;
pub mod vectors;

pub use config::{DrawKind, GeneratorConfig, StreamConfig};
pub use digest::stream_digest;
pub use stream::{generate_stream, Draw, ReferenceGenerator};
pub use vectors::{published_vectors, ReferenceVector};

use crate::rng::RngError;
use thiserror::Error;

/// Errors raised by the oracle harness
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    #[error(transparent)]
    Rng(#[from] RngError),

    /// Derived draw kind requested from a generator that only emits raw words
    #[error("Unsupported draw: {algorithm} cannot produce {draw} draws")]
    UnsupportedDraw {
        algorithm: &'static str,
        draw: DrawKind,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A reference vector diverged from the generated stream
    #[error("Vector '{name}' mismatch at draw {index}: expected {expected}, got {actual}")]
    Mismatch {
        name: String,
        index: usize,
        expected: Draw,
        actual: Draw,
    },

    #[error("Vector '{name}' truncated: expected {expected} draws, got {actual}")]
    Truncated {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl From<serde_json::Error> for OracleError {
    fn from(err: serde_json::Error) -> Self {
        OracleError::Serialization(err.to_string())
    }
}
