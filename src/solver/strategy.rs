//! Guess selection strategies
//!
//! A closed set of strategy tags, each dispatching to one ranker.

use super::ranking::{
    CoverageRanker, ExpectedRemainingRanker, FrequencyRanker, Ranker, ShannonRanker, Suggestion,
};
use crate::core::Word;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for strategy names that are not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected one of: most-likely, coverage, entropy, shannon)")]
pub struct StrategyError(pub String);

/// Strategy used to rank the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Strategy {
    /// Letter frequency across the remaining candidates (fast)
    #[default]
    MostLikely,
    /// Fewest candidates left on an all-miss result (exploration only)
    Coverage,
    /// Lowest expected number of remaining candidates
    Entropy,
    /// Highest Shannon information gain
    Shannon,
}

impl Strategy {
    pub const ALL: [Self; 4] = [Self::MostLikely, Self::Coverage, Self::Entropy, Self::Shannon];

    /// Look a strategy up by its command-line name
    ///
    /// # Errors
    /// Returns `StrategyError` for any name other than `most-likely`,
    /// `coverage`, `entropy` or `shannon`.
    pub fn from_name(name: &str) -> Result<Self, StrategyError> {
        match name {
            "most-likely" => Ok(Self::MostLikely),
            "coverage" => Ok(Self::Coverage),
            "entropy" => Ok(Self::Entropy),
            "shannon" => Ok(Self::Shannon),
            other => Err(StrategyError(other.to_string())),
        }
    }

    /// Command-line name of this strategy
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MostLikely => "most-likely",
            Self::Coverage => "coverage",
            Self::Entropy => "entropy",
            Self::Shannon => "shannon",
        }
    }
}

impl Ranker for Strategy {
    fn rank<'a>(
        &self,
        pool: &[&'a Word],
        candidates: &[&Word],
        limit: usize,
    ) -> Vec<Suggestion<'a>> {
        match self {
            Self::MostLikely => FrequencyRanker.rank(pool, candidates, limit),
            Self::Coverage => CoverageRanker.rank(pool, candidates, limit),
            Self::Entropy => ExpectedRemainingRanker.rank(pool, candidates, limit),
            Self::Shannon => ShannonRanker.rank(pool, candidates, limit),
        }
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
