//! Self-play simulation
//!
//! Plays a full game against a known secret with a chosen strategy, and
//! aggregates the results of many games.

use super::filter::filter_candidates;
use super::pool::PoolPolicy;
use super::ranking::Ranker;
use super::strategy::Strategy;
use crate::core::{GuessRecord, Word};
use log::{debug, warn};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that end a simulated game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("secret {0:?} is not in the dictionary")]
    UnknownSecret(String),
    #[error("strategy {strategy} produced no guess for {secret} in round {round}")]
    NoSuggestion {
        secret: String,
        strategy: Strategy,
        round: usize,
    },
    #[error("strategy {strategy} did not solve {secret} within {rounds} rounds")]
    NonConvergence {
        secret: String,
        strategy: Strategy,
        rounds: usize,
    },
}

/// Path taken to solve one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub secret: Word,
    pub guesses: Vec<Word>,
}

impl GameResult {
    /// Number of guesses used, including the winning one
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// Play one game against `secret`
///
/// Each round guesses the only remaining candidate when there is exactly one,
/// otherwise the top-ranked word from the pool chosen by `policy`.
///
/// # Errors
/// - `UnknownSecret` if `secret` is not in `dictionary`
/// - `NoSuggestion` if the ranker returns nothing (empty pool)
/// - `NonConvergence` if the game is not solved within `dictionary.len() + 1` rounds
///
/// # Examples
/// ```
/// use bofhle::core::Word;
/// use bofhle::solver::{PoolPolicy, Strategy, play_game};
///
/// let dictionary: Vec<Word> = ["quota", "paste", "bdiff"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let result = play_game(&dictionary[0], &dictionary, Strategy::Shannon, PoolPolicy::CANDIDATES)
///     .unwrap();
/// assert_eq!(result.guesses.last(), Some(&dictionary[0]));
/// ```
pub fn play_game(
    secret: &Word,
    dictionary: &[Word],
    strategy: Strategy,
    policy: PoolPolicy,
) -> Result<GameResult, SimulationError> {
    if !dictionary.contains(secret) {
        return Err(SimulationError::UnknownSecret(secret.text().to_string()));
    }

    let all_words: Vec<&Word> = dictionary.iter().collect();
    let max_rounds = dictionary.len() + 1;
    let mut history: Vec<GuessRecord> = Vec::new();
    let mut guesses: Vec<Word> = Vec::new();

    for round in 0..max_rounds {
        let candidates = filter_candidates(dictionary, &history);

        let guess = if let [only] = candidates.as_slice() {
            *only
        } else {
            let pool = policy.select(round, &all_words, &candidates);
            strategy
                .rank(pool, &candidates, 1)
                .first()
                .map(|suggestion| suggestion.word)
                .ok_or_else(|| SimulationError::NoSuggestion {
                    secret: secret.text().to_string(),
                    strategy,
                    round,
                })?
        };

        debug!(
            "{secret}: round {} guess {guess} ({} candidates)",
            round + 1,
            candidates.len()
        );
        guesses.push(guess.clone());

        if guess == secret {
            return Ok(GameResult {
                secret: secret.clone(),
                guesses,
            });
        }

        history.push(GuessRecord::against(guess.clone(), secret));
    }

    warn!("{strategy} gave up on {secret} after {max_rounds} rounds");
    Err(SimulationError::NonConvergence {
        secret: secret.text().to_string(),
        strategy,
        rounds: max_rounds,
    })
}

/// Count how many games took each number of guesses
///
/// # Examples
/// ```
/// use bofhle::solver::histogram;
///
/// let counts = histogram(&[1, 2, 2, 3]);
/// assert_eq!(counts.into_iter().collect::<Vec<_>>(), [(1, 1), (2, 2), (3, 1)]);
/// ```
#[must_use]
pub fn histogram(guess_counts: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &guesses in guess_counts {
        *counts.entry(guesses).or_insert(0) += 1;
    }
    counts
}

/// Aggregate statistics over a batch of games
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub games: usize,
    pub best: usize,
    pub worst: usize,
    pub average: f64,
    pub histogram: BTreeMap<usize, usize>,
}

impl BatchSummary {
    /// Summarize a batch, or `None` if it is empty
    #[must_use]
    pub fn from_results(results: &[GameResult]) -> Option<Self> {
        let counts: Vec<usize> = results.iter().map(GameResult::guess_count).collect();
        let best = *counts.iter().min()?;
        let worst = *counts.iter().max()?;
        let average = counts.iter().sum::<usize>() as f64 / counts.len() as f64;

        Some(Self {
            games: counts.len(),
            best,
            worst,
            average,
            histogram: histogram(&counts),
        })
    }
}
