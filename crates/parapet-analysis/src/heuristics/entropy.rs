//! Shannon entropy scoring for high-entropy string detection.
//!
//! High-entropy strings (>3.5 bits/char) are likely secrets or random
//! tokens; low-entropy strings are natural language or repetitive.

use parapet_core::types::collections::FxHashMap;

/// Compute Shannon entropy of a string in bits per character.
///
/// H = -Σ p(x) * log2(p(x)) for each unique byte x.
///
/// Returns 0.0 for empty strings.
/// Typical ranges:
/// - English text: ~3.5-4.5
/// - Random hex: ~3.7-4.0
/// - Random base64: ~5.0-6.0
/// - Repeated chars: ~0.0-1.0
pub fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let len = s.len() as f64;
    let mut freq: FxHashMap<u8, usize> = FxHashMap::default();

    for &byte in s.as_bytes() {
        *freq.entry(byte).or_default() += 1;
    }

    freq.values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}
