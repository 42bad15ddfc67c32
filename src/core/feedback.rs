//! Per-letter feedback for a guess
//!
//! Feedback is stored as a single base-3 number (0-242), where position `i`
//! contributes `mark × 3^i`:
//! - 0 = miss (`b`, letter not in the word)
//! - 1 = present (`y`, letter in the word, wrong position)
//! - 2 = hit (`g`, letter in the correct position)

use super::word::{WORD_LENGTH, Word, letter_index};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Miss,
    Present,
    Hit,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }

    /// The result-string symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Miss => 'b',
            Self::Present => 'y',
            Self::Hit => 'g',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'b' => Some(Self::Miss),
            'y' => Some(Self::Present),
            'g' => Some(Self::Hit),
            _ => None,
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("result must be exactly five characters, got {0}")]
    InvalidLength(usize),
    #[error("result may only contain b, y or g, found {0:?}")]
    InvalidSymbol(char),
}

/// Feedback for one guess against one target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Feedback(u8);

impl Feedback {
    /// Every letter in the correct position
    pub const ALL_HIT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// No guess letter occurs in the target
    pub const ALL_MISS: Self = Self(0);

    /// Compute the feedback for `guess` when `candidate` is the target
    ///
    /// Hits are assigned first and only the candidate's unmatched letters can
    /// turn a guess letter into "present", so a letter guessed twice against a
    /// target holding it once is marked at most once.
    ///
    /// # Examples
    /// ```
    /// use bofhle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("allay").unwrap();
    /// let target = Word::new("alarm").unwrap();
    /// assert_eq!(Feedback::score(&guess, &target).to_string(), "ggbyb");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, candidate: &Word) -> Self {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut unmatched = [0u8; 26];

        for (i, (&g, &c)) in guess.chars().iter().zip(candidate.chars()).enumerate() {
            if g == c {
                marks[i] = Mark::Hit;
            } else {
                unmatched[letter_index(c)] += 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Hit {
                continue;
            }
            let remaining = &mut unmatched[letter_index(g)];
            if *remaining > 0 {
                *mark = Mark::Present;
                *remaining -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Build feedback from explicit per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self(value)
    }

    /// Per-position marks, first letter first
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut value = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(value % 3);
            value /= 3;
        }
        marks
    }

    /// Check whether the guess was the target
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::ALL_HIT.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.marks().into_iter().map(Mark::symbol).collect();
        f.pad(&text)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse a result string like `bybgb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let count = trimmed.chars().count();
        if count != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(count));
        }

        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (mark, symbol) in marks.iter_mut().zip(trimmed.chars()) {
            *mark = Mark::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }
        Ok(Self::from_marks(marks))
    }
}

impl TryFrom<String> for Feedback {
    type Error = FeedbackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feedback> for String {
    fn from(feedback: Feedback) -> Self {
        feedback.to_string()
    }
}
