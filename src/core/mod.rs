//! Core domain types
//!
//! Words, feedback and guess records. Everything here is pure and immutable.

mod feedback;
mod record;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use record::GuessRecord;
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
