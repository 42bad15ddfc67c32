//! One round of play: a guess and the feedback it received

use super::{Feedback, Word};
use serde::{Deserialize, Serialize};

/// A guess paired with its feedback
///
/// Serialized as `{"guess": "paste", "result": "bybgb"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Word,
    #[serde(rename = "result")]
    pub feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Record the feedback `guess` would receive if `secret` were the answer
    #[must_use]
    pub fn against(guess: Word, secret: &Word) -> Self {
        let feedback = Feedback::score(&guess, secret);
        Self { guess, feedback }
    }

    /// Check whether `word` could still be the answer given this record
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        Feedback::score(&self.guess, word) == self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn against_scores_the_guess() {
        let record = GuessRecord::against(word("paste"), &word("bdiff"));
        assert_eq!(record.feedback.to_string(), "bbbbb");
    }

    #[test]
    fn admits_only_consistent_words() {
        let record = GuessRecord::new(word("paste"), "bybgb".parse().unwrap());
        assert!(record.admits(&word("quota")));
        assert!(!record.admits(&word("paste")));
        assert!(!record.admits(&word("bdiff")));
    }

    #[test]
    fn serializes_with_result_key() {
        let record = GuessRecord::new(word("paste"), "bybgb".parse().unwrap());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"guess":"paste","result":"bybgb"}"#);

        let back: GuessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn rejects_invalid_result_on_load() {
        let json = r#"{"guess":"paste","result":"bxbgb"}"#;
        assert!(serde_json::from_str::<GuessRecord>(json).is_err());
    }
}
