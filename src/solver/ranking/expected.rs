//! Expected-remaining ranking

use super::partition::expected_remaining;
use super::{Ranker, Score, Suggestion, score_pool, sort_ascending};
use crate::core::Word;

/// Ranks by expected candidates left after the guess (lower is better)
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedRemainingRanker;

impl Ranker for ExpectedRemainingRanker {
    fn rank<'a>(
        &self,
        pool: &[&'a Word],
        candidates: &[&Word],
        limit: usize,
    ) -> Vec<Suggestion<'a>> {
        let mut ranked = score_pool(pool, |word| {
            Score::Real(expected_remaining(word, candidates))
        });

        sort_ascending(&mut ranked);
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{texts, words};
    use super::*;

    #[test]
    fn splitting_guess_ranks_first() {
        let candidates = words(&["quota", "paste", "bdiff"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let blind = Word::new("xxxxx").unwrap();
        let pool = [&blind, refs[0]];

        let ranked = ExpectedRemainingRanker.rank(&pool, &refs, 10);

        // quota splits into three singletons: 3 / 3; xxxxx leaves one group: 9 / 3
        assert_eq!(texts(&ranked), ["quota", "xxxxx"]);
        assert!((ranked[0].score.as_f64() - 1.0).abs() < 1e-9);
        assert!((ranked[1].score.as_f64() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn ties_break_alphabetically() {
        let candidates = words(&["quota", "paste", "bdiff"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let ranked = ExpectedRemainingRanker.rank(&refs, &refs, 2);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].score.as_f64() <= ranked[1].score.as_f64());
        // bdiff cannot tell quota from paste, so it is left out
        assert_eq!(texts(&ranked), ["paste", "quota"]);
    }
}
