//! Candidate filtering
//!
//! Narrows a dictionary to the words consistent with every recorded round.

use crate::core::{GuessRecord, Word};
use log::debug;

/// Filter `dictionary` down to the words consistent with `history`
///
/// Dictionary order is preserved. An empty history returns every word; an
/// empty result means the history is contradictory or exhausted and is left
/// for the caller to report.
///
/// # Examples
/// ```
/// use bofhle::core::{GuessRecord, Word};
/// use bofhle::solver::filter_candidates;
///
/// let dictionary: Vec<Word> = ["quota", "paste", "bdiff"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = [GuessRecord::new(
///     Word::new("paste").unwrap(),
///     "bybgb".parse().unwrap(),
/// )];
///
/// let candidates = filter_candidates(&dictionary, &history);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "quota");
/// ```
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    let mut candidates: Vec<&'a Word> = dictionary.iter().collect();

    for record in history {
        let before = candidates.len();
        candidates.retain(|&word| record.admits(word));
        debug!(
            "{} {}: {} -> {} candidates",
            record.guess,
            record.feedback,
            before,
            candidates.len()
        );
    }

    candidates
}
