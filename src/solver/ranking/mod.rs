//! Guess rankers
//!
//! Each ranker scores every word of a guess pool against the current
//! candidates and returns the pool ordered best-first. Pool words are scored
//! in parallel; results are collected in pool order before sorting, so the
//! output is deterministic.

mod coverage;
mod expected;
mod frequency;
pub mod partition;
mod shannon;

pub use coverage::CoverageRanker;
pub use expected::ExpectedRemainingRanker;
pub use frequency::FrequencyRanker;
pub use shannon::ShannonRanker;

use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;

/// Score attached to a suggested guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Whole-number scores (letter frequency, coverage)
    Count(usize),
    /// Fractional scores (expected remaining, bits of information)
    Real(f64),
}

impl Score {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(n) => n as f64,
            Self::Real(x) => x,
        }
    }

    /// Total order over scores, comparing mixed variants numerically
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Count(a), Self::Count(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => f.pad(&n.to_string()),
            Self::Real(x) => f.pad(&format!("{x:.3}")),
        }
    }
}

/// A pool word with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub score: Score,
    pub word: &'a Word,
}

/// Orders a guess pool by usefulness against the current candidates
pub trait Ranker {
    /// Rank `pool` given `candidates`, keeping at most `limit` entries
    fn rank<'a>(&self, pool: &[&'a Word], candidates: &[&Word], limit: usize)
    -> Vec<Suggestion<'a>>;
}

/// Score every pool word in parallel, preserving pool order
fn score_pool<'a, F>(pool: &[&'a Word], score: F) -> Vec<Suggestion<'a>>
where
    F: Fn(&Word) -> Score + Sync,
{
    pool.par_iter()
        .map(|&word| Suggestion {
            score: score(word),
            word,
        })
        .collect()
}

/// Lower scores first, ties broken alphabetically
fn sort_ascending(ranked: &mut [Suggestion<'_>]) {
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.word.cmp(b.word)));
}

/// Higher scores first, ties broken alphabetically
fn sort_descending(ranked: &mut [Suggestion<'_>]) {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(b.word)));
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::Word;

    pub fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    pub fn texts(ranked: &[super::Suggestion<'_>]) -> Vec<String> {
        ranked.iter().map(|s| s.word.text().to_string()).collect()
    }
}
