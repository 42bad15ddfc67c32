//! Guess scoring, candidate filtering and self-play
//!
//! Everything here is a pure function of its inputs: the dictionary and the
//! history are passed in, never held.

mod filter;
mod pool;
pub mod ranking;
mod simulator;
mod strategy;

pub use filter::filter_candidates;
pub use pool::PoolPolicy;
pub use ranking::{Ranker, Score, Suggestion};
pub use simulator::{BatchSummary, GameResult, SimulationError, histogram, play_game};
pub use strategy::{Strategy, StrategyError};
