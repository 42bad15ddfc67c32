//! Display functions for command results

use super::formatters::{ResultStyle, create_progress_bar, format_result};
use crate::core::GuessRecord;
use crate::solver::{BatchSummary, Strategy, Suggestion};
use colored::Colorize;
use std::fmt;
use std::time::Duration;

/// Heading printed above the suggestion list
#[must_use]
pub const fn suggestion_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::MostLikely => "Next guesses:",
        Strategy::Coverage => "Next guesses (min remaining if bbbbb):",
        Strategy::Entropy => "Next guesses (expected remaining):",
        Strategy::Shannon => "Next guesses (shannon entropy):",
    }
}

/// Everything shown for the current session
pub struct SessionView<'a> {
    pub history: &'a [GuessRecord],
    pub candidates: usize,
    pub strategy: Strategy,
    pub suggestions: &'a [Suggestion<'a>],
    pub style: ResultStyle,
}

/// Render the session: history table, candidate count and suggestions
#[must_use]
pub fn render_session(view: &SessionView<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    write_session(&mut out, view).unwrap_or_default();
    out
}

fn write_session(out: &mut impl fmt::Write, view: &SessionView<'_>) -> fmt::Result {
    if let ResultStyle::Tiles(_) = view.style {
        writeln!(out, "guess/result")?;
        for record in view.history {
            writeln!(
                out,
                "{}",
                format_result(&record.guess, record.feedback, view.style)
            )?;
        }
    } else {
        writeln!(out, "guess  result")?;
        for record in view.history {
            writeln!(
                out,
                "{}  {}",
                record.guess,
                format_result(&record.guess, record.feedback, view.style)
            )?;
        }
    }

    writeln!(out, "Candidates remaining: {}", view.candidates)?;
    writeln!(out, "{}", suggestion_label(view.strategy))?;
    for suggestion in view.suggestions {
        writeln!(out, "{:>4} {}", suggestion.score, suggestion.word)?;
    }
    Ok(())
}

/// Print the session state
pub fn print_session(view: &SessionView<'_>) {
    print!("{}", render_session(view));
}

/// Plain-text summary lines for a batch run
#[must_use]
pub fn summary_lines(
    strategy: Strategy,
    summary: &BatchSummary,
    elapsed: Duration,
) -> Vec<String> {
    let per_game_ms = elapsed.as_secs_f64() * 1000.0 / summary.games as f64;
    let mut lines = vec![
        "Summary".to_string(),
        format!("Strategy: {strategy}"),
        format!("Games: {}", summary.games),
        format!("Best: {} guesses", summary.best),
        format!("Worst: {} guesses", summary.worst),
        format!("Average: {:.2} guesses", summary.average),
        format!("Total time: {:.2} seconds", elapsed.as_secs_f64()),
        format!("Time per game: {per_game_ms:.2} ms"),
        "Histogram (guesses -> games):".to_string(),
    ];
    lines.extend(
        summary
            .histogram
            .iter()
            .map(|(guesses, games)| format!("  {guesses} -> {games}")),
    );
    lines
}

/// Print the summary of a batch run with a distribution chart
pub fn print_batch_summary(strategy: Strategy, summary: &BatchSummary, elapsed: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Games played:     {}", summary.games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", summary.average).bright_yellow().bold()
    );
    println!("   Best case:        {}", summary.best.to_string().green());
    println!("   Worst case:       {}", summary.worst.to_string().yellow());
    println!("   Time taken:       {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Time per game:    {:.2}ms",
        elapsed.as_secs_f64() * 1000.0 / summary.games as f64
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = summary.histogram.values().copied().max().unwrap_or(0);
    for (guesses, &games) in &summary.histogram {
        let pct = games as f64 / summary.games as f64 * 100.0;
        let bar = create_progress_bar(games as f64, most as f64, 40);
        println!("   {guesses:>2}: {} {games:4} ({pct:5.1}%)", bar.green());
    }
}
