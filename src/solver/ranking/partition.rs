//! Feedback partitions of a candidate set
//!
//! Guessing a word splits the candidates into groups that would all produce
//! the same feedback. The expected-remaining and Shannon rankers both score a
//! guess from the sizes of these groups.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Group candidates by the feedback they produce with the guess
#[must_use]
pub fn group_by_feedback(guess: &Word, candidates: &[&Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(Feedback::score(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Expected number of candidates left after guessing `guess`
///
/// Assumes the answer is uniformly distributed over `candidates`:
/// Σ size² / total. Returns 0.0 when there are no candidates.
///
/// # Examples
/// ```
/// use bofhle::core::Word;
/// use bofhle::solver::ranking::partition::expected_remaining;
///
/// let guess = Word::new("paste").unwrap();
/// let candidates = [Word::new("paste").unwrap(), Word::new("bdiff").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two singleton groups: (1 + 1) / 2
/// assert!((expected_remaining(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let squares: usize = group_by_feedback(guess, candidates)
        .values()
        .map(|&size| size * size)
        .sum();

    squares as f64 / candidates.len() as f64
}

/// Shannon entropy in bits of the feedback distribution for `guess`
#[must_use]
pub fn information_bits(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Shannon entropy of a group-size distribution
///
/// H = -Σ p · log₂(p)
///
/// # Properties
/// - 0.0 when a single group holds every candidate
/// - log₂(n) for n equally sized groups
#[must_use]
pub fn shannon_entropy<S>(group_sizes: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = group_sizes.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    group_sizes
        .values()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn feedback(value: [Mark; 5]) -> Feedback {
        Feedback::from_marks(value)
    }

    #[test]
    fn groups_cover_every_candidate() {
        let candidates = words(&["quota", "paste", "bdiff", "patch"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let guess = Word::new("paste").unwrap();

        let groups = group_by_feedback(&guess, &refs);
        assert_eq!(groups.values().sum::<usize>(), 4);
        assert_eq!(groups.get(&Feedback::ALL_HIT), Some(&1));
    }

    #[test]
    fn expected_remaining_when_nothing_splits() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        // One group of three: 9 / 3
        assert!((expected_remaining(&guess, &refs) - 3.0).abs() < 1e-9);
        assert!(information_bits(&guess, &refs).abs() < 1e-9);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let candidates = words(&["paste", "bdiff"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let guess = Word::new("paste").unwrap();

        assert!((information_bits(&guess, &refs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_candidates_score_zero() {
        let guess = Word::new("paste").unwrap();
        assert!(expected_remaining(&guess, &[]).abs() < f64::EPSILON);
        assert!(information_bits(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn uniform_distribution_entropy() {
        let mut sizes = FxHashMap::default();
        sizes.insert(Feedback::ALL_MISS, 25);
        sizes.insert(Feedback::ALL_HIT, 25);
        sizes.insert(feedback([Mark::Hit, Mark::Miss, Mark::Miss, Mark::Miss, Mark::Miss]), 25);
        sizes.insert(feedback([Mark::Present, Mark::Miss, Mark::Miss, Mark::Miss, Mark::Miss]), 25);

        assert!((shannon_entropy(&sizes) - 2.0).abs() < 0.001);
    }

    #[test]
    fn skewed_distribution_has_less_entropy() {
        let mut skewed = FxHashMap::default();
        skewed.insert(Feedback::ALL_MISS, 97);
        skewed.insert(Feedback::ALL_HIT, 3);

        let mut even = FxHashMap::default();
        even.insert(Feedback::ALL_MISS, 50);
        even.insert(Feedback::ALL_HIT, 50);

        assert!(shannon_entropy(&even) > shannon_entropy(&skewed));
    }
}
