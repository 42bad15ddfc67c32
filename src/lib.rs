//! bofhle
//!
//! Guess tracking and next-guess suggestions for bofhle, a five-letter word
//! game played over Unix command names.
//!
//! # Quick Start
//!
//! ```rust
//! use bofhle::core::{Feedback, GuessRecord, Word};
//! use bofhle::solver::{Ranker, Strategy, filter_candidates};
//!
//! let dictionary: Vec<Word> = ["quota", "paste", "bdiff"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! // Guess "paste", get b y b g b back
//! let guess = Word::new("paste").unwrap();
//! let feedback: Feedback = "bybgb".parse().unwrap();
//! let history = vec![GuessRecord::new(guess, feedback)];
//!
//! let candidates = filter_candidates(&dictionary, &history);
//! let suggestions = Strategy::Shannon.rank(&candidates, &candidates, 5);
//! assert_eq!(suggestions[0].word.text(), "quota");
//! ```

// Core domain types
pub mod core;

// Filtering, ranking and self-play
pub mod solver;

// Word lists
pub mod wordlists;

// Session persistence
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
