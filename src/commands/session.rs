//! Interactive session commands
//!
//! Record guesses, reset the session and compute the suggestions shown to
//! the player. The history lives in a `HistoryStore`; everything else is
//! recomputed from it on every call.

use crate::core::{Feedback, GuessRecord, Word};
use crate::history::HistoryStore;
use crate::solver::{PoolPolicy, Ranker, Strategy, Suggestion, filter_candidates};
use anyhow::{Context, Result, bail, ensure};
use log::info;

/// Where the feedback for a recorded guess comes from
#[derive(Debug, Clone, Copy)]
pub enum FeedbackSource<'a> {
    /// A result string typed by the player, like `bybgb`
    Result(&'a str),
    /// A known secret; the feedback is computed
    Secret(&'a str),
}

/// Settings for computing suggestions
#[derive(Debug, Clone, Copy)]
pub struct SuggestConfig {
    pub strategy: Strategy,
    pub policy: PoolPolicy,
    pub limit: usize,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(strategy: Strategy, candidate_only: bool) -> Self {
        Self {
            strategy,
            policy: if candidate_only {
                PoolPolicy::CANDIDATES
            } else {
                PoolPolicy::Dictionary
            },
            limit: 10,
        }
    }
}

/// Current session state with suggestions
#[derive(Debug)]
pub struct SessionReport<'d> {
    pub history: Vec<GuessRecord>,
    pub candidates: Vec<&'d Word>,
    pub suggestions: Vec<Suggestion<'d>>,
}

/// Normalize a word and require it to be in the dictionary
///
/// # Errors
/// Returns an error if the word is not five letters or not in the dictionary.
pub fn validate_word(text: &str, dictionary: &[Word]) -> Result<Word> {
    let word = Word::new(text).with_context(|| format!("invalid word {text:?}"))?;
    ensure!(
        dictionary.contains(&word),
        "{word} is not a bofhle command from the word list"
    );
    Ok(word)
}

/// Validate a guess, work out its feedback and append it to the history
///
/// With `reset`, the history is cleared first, but only once the input has
/// been validated.
///
/// # Errors
/// Returns an error if the guess, secret or result is invalid, or if the
/// history cannot be written.
pub fn record_guess<H: HistoryStore>(
    store: &mut H,
    dictionary: &[Word],
    guess: &str,
    source: FeedbackSource<'_>,
    reset: bool,
) -> Result<GuessRecord> {
    let guess = validate_word(guess, dictionary)?;

    let record = match source {
        FeedbackSource::Secret(secret) => {
            let secret = validate_word(secret, dictionary).context("invalid secret")?;
            GuessRecord::against(guess, &secret)
        }
        FeedbackSource::Result(result) => {
            let feedback: Feedback = result
                .parse()
                .with_context(|| format!("invalid result {result:?}"))?;
            GuessRecord::new(guess, feedback)
        }
    };

    if reset {
        reset_session(store)?;
    }
    store
        .append(&record)
        .context("failed to record guess")?;
    Ok(record)
}

/// Start a new session by discarding the history
///
/// # Errors
/// Returns an error if the history cannot be cleared.
pub fn reset_session<H: HistoryStore>(store: &mut H) -> Result<()> {
    store.clear().context("failed to reset session")?;
    info!("new session started");
    Ok(())
}

/// Load the history and rank the next guesses
///
/// # Errors
/// Returns an error if the history cannot be read, or if no dictionary word
/// is consistent with it.
pub fn suggest<'d, H: HistoryStore>(
    store: &H,
    dictionary: &'d [Word],
    config: SuggestConfig,
) -> Result<SessionReport<'d>> {
    let history = store.load_all().context("failed to load history")?;
    let candidates = filter_candidates(dictionary, &history);

    if candidates.is_empty() {
        bail!("No candidates remain. Check your inputs or reset the session.");
    }

    let all_words: Vec<&Word> = dictionary.iter().collect();
    let pool = config
        .policy
        .select(history.len(), &all_words, &candidates);
    let suggestions = config.strategy.rank(pool, &candidates, config.limit);

    Ok(SessionReport {
        history,
        candidates,
        suggestions,
    })
}
