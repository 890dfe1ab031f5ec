//! Partitioning the candidate pool by the feedback a guess would receive.

use crate::entropy;
use crate::feedback::{compute_feedback, FeedbackPattern};
use crate::pool::CandidatePool;
use crate::word::Word;

/// Count of candidates per feedback pattern for one guess.
///
/// Dense over all 243 patterns; the counts always sum to the size of the pool
/// the distribution was estimated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    counts: [u32; FeedbackPattern::NUM_PATTERNS],
    total: usize,
}

impl Distribution {
    pub fn count(&self, pattern: FeedbackPattern) -> u32 {
        self.counts[pattern.0 as usize]
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct patterns with at least one candidate.
    pub fn num_patterns(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Non-empty buckets in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (FeedbackPattern, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(idx, &count)| (FeedbackPattern(idx as u8), count))
    }

    /// Entropy of this distribution in bits.
    pub fn entropy(&self) -> f64 {
        entropy::entropy(self, self.total)
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            counts: [0; FeedbackPattern::NUM_PATTERNS],
            total: 0,
        }
    }
}

/// Bucket every candidate in `pool` by the feedback `guess` would get if that
/// candidate were the secret.
pub fn estimate_distribution(guess: &Word, pool: &CandidatePool) -> Distribution {
    let mut distribution = Distribution::default();
    for candidate in pool.iter() {
        let pattern = compute_feedback(guess, candidate);
        distribution.counts[pattern.0 as usize] += 1;
    }
    distribution.total = pool.len();
    distribution
}
