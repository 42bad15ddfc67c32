//! Guess pool selection
//!
//! Decides which words may be suggested in a given round: the whole
//! dictionary, or only the words that can still be the answer.

use crate::core::Word;

/// Which words are eligible as the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPolicy {
    /// Always guess from the full dictionary
    Dictionary,
    /// Guess from the full dictionary before round `n` (0-based), then only
    /// from the remaining candidates. `CandidatesAfter(0)` always uses candidates.
    CandidatesAfter(usize),
}

impl PoolPolicy {
    /// Only ever suggest words that can still be the answer
    pub const CANDIDATES: Self = Self::CandidatesAfter(0);

    /// Pick the guess pool for `round`
    ///
    /// # Examples
    /// ```
    /// use bofhle::core::Word;
    /// use bofhle::solver::PoolPolicy;
    ///
    /// let words: Vec<Word> = ["alpha", "bravo", "candy"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let dictionary: Vec<&Word> = words.iter().collect();
    /// let candidates = vec![&words[0], &words[2]];
    ///
    /// let policy = PoolPolicy::CandidatesAfter(1);
    /// assert_eq!(policy.select(0, &dictionary, &candidates).len(), 3);
    /// assert_eq!(policy.select(1, &dictionary, &candidates).len(), 2);
    /// ```
    #[must_use]
    pub fn select<'s, 'a>(
        self,
        round: usize,
        dictionary: &'s [&'a Word],
        candidates: &'s [&'a Word],
    ) -> &'s [&'a Word] {
        match self {
            Self::CandidatesAfter(threshold) if round >= threshold => candidates,
            _ => dictionary,
        }
    }

    /// Whether this policy ever restricts guesses to candidates
    #[must_use]
    pub const fn uses_candidates(self) -> bool {
        matches!(self, Self::CandidatesAfter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Vec<Word> {
        ["alpha", "bravo", "candy"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn dictionary_policy_never_switches() {
        let words = setup();
        let dictionary: Vec<&Word> = words.iter().collect();
        let candidates = vec![&words[0], &words[2]];

        for round in [0, 1, 5] {
            let pool = PoolPolicy::Dictionary.select(round, &dictionary, &candidates);
            assert_eq!(pool, dictionary.as_slice());
        }
    }

    #[test]
    fn switches_at_threshold() {
        let words = setup();
        let dictionary: Vec<&Word> = words.iter().collect();
        let candidates = vec![&words[0], &words[2]];
        let policy = PoolPolicy::CandidatesAfter(1);

        assert_eq!(policy.select(0, &dictionary, &candidates), dictionary.as_slice());
        assert_eq!(policy.select(1, &dictionary, &candidates), candidates.as_slice());
        assert_eq!(policy.select(2, &dictionary, &candidates), candidates.as_slice());
    }

    #[test]
    fn zero_threshold_is_candidates_only() {
        let words = setup();
        let dictionary: Vec<&Word> = words.iter().collect();
        let candidates = vec![&words[1]];

        assert_eq!(
            PoolPolicy::CANDIDATES.select(0, &dictionary, &candidates),
            candidates.as_slice()
        );
        assert!(PoolPolicy::CANDIDATES.uses_candidates());
        assert!(!PoolPolicy::Dictionary.uses_candidates());
    }
}
