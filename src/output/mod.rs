//! Terminal output formatting
//!
//! Display utilities for session state and self-play reports.

pub mod display;
pub mod formatters;

pub use display::{
    SessionView, print_batch_summary, print_session, render_session, suggestion_label,
    summary_lines,
};
pub use formatters::{ResultStyle, Theme};
