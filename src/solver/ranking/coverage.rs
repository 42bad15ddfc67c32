//! Coverage ranking
//!
//! Exploration-only: a guess is judged solely by how many candidates would
//! survive if it came back all-miss. Partial feedback is ignored and the
//! guess is never rewarded for possibly being the answer.

use super::{Ranker, Score, Suggestion, score_pool, sort_ascending};
use crate::core::Word;

/// Ranks by candidates left after an all-miss result (lower is better)
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageRanker;

impl Ranker for CoverageRanker {
    fn rank<'a>(
        &self,
        pool: &[&'a Word],
        candidates: &[&Word],
        limit: usize,
    ) -> Vec<Suggestion<'a>> {
        let candidate_masks: Vec<u32> = candidates.iter().map(|c| c.letter_mask()).collect();

        let mut ranked = score_pool(pool, |word| {
            let mask = word.letter_mask();
            let untouched = candidate_masks.iter().filter(|&&c| c & mask == 0).count();
            Score::Count(untouched)
        });

        sort_ascending(&mut ranked);
        ranked.truncate(limit);
        ranked
    }
}
