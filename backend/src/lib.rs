//! Reference RNG Core
//!
//! Bit-exact reference generators used as oracles for validating a faster
//! random number facility.
//!
//! # Architecture
//!
//! - **rng**: MT19937-64 and xoshiro256** state machines
//! - **oracle**: Configured reference streams, published vectors, digests
//!
//! # Critical Invariants
//!
//! 1. Same seed → same stream, bit for bit, on every platform
//! 2. All arithmetic wraps modulo 2^64
//! 3. Generators are single-owner values: no locking, no shared state
//! 4. Not cryptographically secure

pub mod oracle;
pub mod rng;

// Re-exports for convenience
pub use oracle::{
    generate_stream, published_vectors, stream_digest, Draw, DrawKind, GeneratorConfig,
    OracleError, ReferenceGenerator, ReferenceVector, StreamConfig,
};
pub use rng::{Mt19937_64, MtSnapshot, ReferenceRng, RngError, Xoshiro256StarStar};
