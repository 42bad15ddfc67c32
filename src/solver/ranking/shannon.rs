//! Shannon-entropy ranking

use super::partition::information_bits;
use super::{Ranker, Score, Suggestion, score_pool, sort_descending};
use crate::core::Word;

/// Ranks by bits of information the feedback is expected to carry (higher is better)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShannonRanker;

impl Ranker for ShannonRanker {
    fn rank<'a>(
        &self,
        pool: &[&'a Word],
        candidates: &[&Word],
        limit: usize,
    ) -> Vec<Suggestion<'a>> {
        let mut ranked = score_pool(pool, |word| {
            Score::Real(information_bits(word, candidates))
        });

        sort_descending(&mut ranked);
        ranked.truncate(limit);
        ranked
    }
}
