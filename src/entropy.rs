//! Shannon entropy of feedback distributions.

use crate::distribution::Distribution;
use crate::feedback::FeedbackPattern;

/// Entropy in bits of `distribution`, with probabilities taken over `total`.
///
/// Returns 0.0 for an empty pool. Terms are summed smallest count first so
/// that two distributions with the same bucket sizes score bit-identically,
/// whatever patterns the buckets belong to.
pub fn entropy(distribution: &Distribution, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    let mut len = 0;
    for (_, count) in distribution.iter() {
        counts[len] = count;
        len += 1;
    }
    let counts = &mut counts[..len];
    counts.sort_unstable();

    let n = total as f64;
    let mut entropy = 0.0;
    for &count in counts.iter() {
        let p = count as f64 / n;
        entropy -= p * p.log2();
    }

    entropy
}

/// Upper bound on the entropy any guess can reach over `candidates` words.
pub fn max_entropy(candidates: usize) -> f64 {
    if candidates == 0 {
        0.0
    } else {
        (candidates as f64).log2()
    }
}

/// Expected number of candidates left after a guess with the given entropy.
pub fn expected_remaining(candidates: usize, entropy: f64) -> f64 {
    candidates as f64 / 2_f64.powf(entropy)
}
