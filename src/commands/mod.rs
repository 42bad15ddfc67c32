//! Command implementations

pub mod session;
pub mod simulate;

pub use session::{
    FeedbackSource, SessionReport, SuggestConfig, record_guess, reset_session, suggest,
    validate_word,
};
pub use simulate::{SimulationConfig, SimulationRun, run_simulation, save_report, write_report};
