//! Batch self-play over the dictionary
//!
//! Plays every dictionary word (or the first `limit`) as the secret, writes
//! a per-game log and summarizes the guess counts.

use crate::core::Word;
use crate::output::summary_lines;
use crate::solver::{BatchSummary, GameResult, PoolPolicy, Strategy, play_game};
use anyhow::{Context, Result};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Round from which candidate mode guesses only candidates in a batch
pub const CANDIDATE_ROUND: usize = 2;

/// Settings for a batch run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub strategy: Strategy,
    pub policy: PoolPolicy,
    pub limit: Option<usize>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(strategy: Strategy, candidate_only: bool) -> Self {
        Self {
            strategy,
            policy: if candidate_only {
                PoolPolicy::CandidatesAfter(CANDIDATE_ROUND)
            } else {
                PoolPolicy::Dictionary
            },
            limit: None,
            show_progress: true,
        }
    }

    /// `bofhle-<strategy>.log`, with a `-candidate` suffix in candidate mode
    #[must_use]
    pub fn default_log_path(&self) -> PathBuf {
        let suffix = if self.policy.uses_candidates() {
            "-candidate"
        } else {
            ""
        };
        PathBuf::from(format!("bofhle-{}{suffix}.log", self.strategy))
    }
}

/// Results of a finished batch
#[derive(Debug)]
pub struct SimulationRun {
    pub strategy: Strategy,
    pub results: Vec<GameResult>,
    pub summary: BatchSummary,
    pub elapsed: Duration,
}

/// Play one game per secret, in dictionary order
///
/// # Errors
/// Returns an error if the dictionary is empty or any game fails to finish.
pub fn run_simulation(dictionary: &[Word], config: &SimulationConfig) -> Result<SimulationRun> {
    let secrets = &dictionary[..config.limit.map_or(dictionary.len(), |n| n.min(dictionary.len()))];

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results = secrets
        .par_iter()
        .progress_with(pb.clone())
        .map(|secret| play_game(secret, dictionary, config.strategy, config.policy))
        .collect::<Result<Vec<_>, _>>()
        .context("self-play failed")?;
    let elapsed = start.elapsed();
    pb.finish_and_clear();

    let summary =
        BatchSummary::from_results(&results).context("no games to play: the dictionary is empty")?;

    info!(
        "{}: {} games, average {:.2} guesses, worst {} in {:.2}s",
        config.strategy,
        summary.games,
        summary.average,
        summary.worst,
        elapsed.as_secs_f64()
    );

    Ok(SimulationRun {
        strategy: config.strategy,
        results,
        summary,
        elapsed,
    })
}

/// One line per game, then the summary
///
/// # Errors
/// Returns any error from the writer.
pub fn write_report<W: Write>(run: &SimulationRun, mut out: W) -> io::Result<()> {
    for result in &run.results {
        let path: Vec<&str> = result.guesses.iter().map(Word::text).collect();
        writeln!(
            out,
            "secret={} guesses={} path={}",
            result.secret,
            result.guess_count(),
            path.join(" ")
        )?;
    }
    writeln!(out)?;
    for line in summary_lines(run.strategy, &run.summary, run.elapsed) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Write the report to `path`, replacing any previous log
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_report(run: &SimulationRun, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    write_report(run, BufWriter::new(file))
        .with_context(|| format!("failed to write log file {}", path.display()))?;
    info!("wrote self-play log to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["quota", "paste", "bdiff", "chmod", "mkdir"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    fn quiet(strategy: Strategy, candidate_only: bool) -> SimulationConfig {
        SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(strategy, candidate_only)
        }
    }

    #[test]
    fn log_path_names_strategy_and_mode() {
        assert_eq!(
            quiet(Strategy::Shannon, false).default_log_path(),
            PathBuf::from("bofhle-shannon.log")
        );
        assert_eq!(
            quiet(Strategy::MostLikely, true).default_log_path(),
            PathBuf::from("bofhle-most-likely-candidate.log")
        );
    }

    #[test]
    fn candidate_mode_switches_after_two_rounds() {
        assert_eq!(
            quiet(Strategy::Entropy, true).policy,
            PoolPolicy::CandidatesAfter(2)
        );
        assert_eq!(quiet(Strategy::Entropy, false).policy, PoolPolicy::Dictionary);
    }

    #[test]
    fn every_secret_is_played_in_order() {
        let dictionary = dictionary();
        for strategy in Strategy::ALL {
            let run = run_simulation(&dictionary, &quiet(strategy, true)).unwrap();

            assert_eq!(run.summary.games, dictionary.len());
            let secrets: Vec<&Word> = run.results.iter().map(|r| &r.secret).collect();
            assert_eq!(secrets, dictionary.iter().collect::<Vec<_>>());
            for result in &run.results {
                assert_eq!(result.guesses.last(), Some(&result.secret), "{strategy}");
            }
        }
    }

    #[test]
    fn limit_truncates_the_batch() {
        let dictionary = dictionary();
        let config = SimulationConfig {
            limit: Some(2),
            ..quiet(Strategy::Coverage, true)
        };
        let run = run_simulation(&dictionary, &config).unwrap();
        assert_eq!(run.results.len(), 2);

        let config = SimulationConfig {
            limit: Some(50),
            ..config
        };
        assert_eq!(run_simulation(&dictionary, &config).unwrap().results.len(), 5);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        assert!(run_simulation(&[], &quiet(Strategy::MostLikely, true)).is_err());
    }

    #[test]
    fn report_lists_games_then_summary() {
        let dictionary = dictionary();
        let config = SimulationConfig {
            limit: Some(1),
            ..quiet(Strategy::MostLikely, true)
        };
        let run = run_simulation(&dictionary, &config).unwrap();

        let mut buffer = Vec::new();
        write_report(&run, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        let first = &run.results[0];
        let path: Vec<&str> = first.guesses.iter().map(Word::text).collect();
        assert_eq!(
            lines[0],
            format!(
                "secret=quota guesses={} path={}",
                first.guess_count(),
                path.join(" ")
            )
        );
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Summary");
        assert_eq!(lines[3], "Strategy: most-likely");
        assert_eq!(lines[4], "Games: 1");
    }
}
