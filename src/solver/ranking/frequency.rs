//! Letter-frequency ranking ("most likely")
//!
//! Favors guesses built from the letters that occur most often across the
//! remaining candidates.

use super::{Ranker, Score, Suggestion, score_pool};
use crate::core::{Word, letter_index};

/// Ranks by summed candidate frequency of each distinct letter (higher is better)
///
/// Ties keep their pool order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanker;

impl FrequencyRanker {
    /// Occurrences of each letter across all candidates concatenated
    fn letter_counts(candidates: &[&Word]) -> [usize; 26] {
        let mut counts = [0usize; 26];
        for candidate in candidates {
            for &ch in candidate.chars() {
                counts[letter_index(ch)] += 1;
            }
        }
        counts
    }
}

impl Ranker for FrequencyRanker {
    fn rank<'a>(
        &self,
        pool: &[&'a Word],
        candidates: &[&Word],
        limit: usize,
    ) -> Vec<Suggestion<'a>> {
        let counts = Self::letter_counts(candidates);

        let mut ranked = score_pool(pool, |word| {
            let mask = word.letter_mask();
            let total = (0..26)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| counts[i])
                .sum();
            Score::Count(total)
        });

        // Stable sort: equal scores stay in pool order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }
}
