//! Dictionaries
//!
//! The default dictionary is embedded in the binary; alternatives can be
//! loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;

/// The embedded dictionary as validated words, in file order
#[must_use]
pub fn default_dictionary() -> Vec<Word> {
    loader::words_from_slice(WORDS)
}
