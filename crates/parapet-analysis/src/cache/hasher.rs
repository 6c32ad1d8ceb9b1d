//! Content fingerprints via SHA-256.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 fingerprint of file content, hex-encoded.
///
/// Deterministic for identical bytes; any byte change produces a different
/// fingerprint with overwhelming probability.
pub fn fingerprint(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
