//! Stream fingerprints
//!
//! Long streams are compared by SHA-256 over the little-endian 8-byte
//! encoding of each draw, concatenated in order. Floats contribute their bit
//! pattern, so two digests match only if every draw is bit-identical.

use sha2::{Digest, Sha256};

use super::Draw;

/// Lowercase hex SHA-256 of a stream of draws
pub fn stream_digest(draws: &[Draw]) -> String {
    let mut hasher = Sha256::new();
    for draw in draws {
        hasher.update(draw.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
