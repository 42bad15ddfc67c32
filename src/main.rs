//! bofhle - CLI
//!
//! Tracks the guesses of a five-letter word game session and suggests the
//! next guess, or plays every dictionary word against itself.

use anyhow::{Context, Result};
use bofhle::{
    commands::{
        FeedbackSource, SimulationConfig, SuggestConfig, record_guess, reset_session,
        run_simulation, save_report, suggest,
    },
    core::Word,
    history::{JsonlHistory, default_history_path},
    output::{ResultStyle, SessionView, Theme, print_batch_summary, print_session},
    solver::Strategy,
    wordlists::{default_dictionary, loader::load_from_file},
};
use clap::{ArgGroup, Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "bofhle",
    about = "Guess tracker and suggestion engine for bofhle, the five-letter command game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ranking strategy
    #[arg(short, long, global = true, value_enum, default_value_t = Strategy::MostLikely)]
    strategy: Strategy,

    /// Suggest from the whole word list instead of the remaining candidates
    #[arg(short, long, global = true)]
    words: bool,

    /// Load the dictionary from a file instead of the embedded list
    #[arg(long, global = true)]
    wordlist: Option<PathBuf>,

    /// Session history file (default: $HOME/.bofhle.jsonl)
    #[arg(long, global = true, env = "BOFHLE_HISTORY")]
    history: Option<PathBuf>,

    /// Number of suggestions to show
    #[arg(short = 'n', long, global = true, default_value_t = 10)]
    top: usize,

    /// Show results as b/y/g letters instead of emoji
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Disable colored result tiles
    #[arg(long, global = true)]
    no_color: bool,

    /// Color theme for result tiles
    #[arg(long, global = true, value_enum, default_value_t = Theme::Light)]
    theme: Theme,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a guess and its result, then show the session
    #[command(group(ArgGroup::new("feedback").required(true).args(["result", "secret"])))]
    Guess {
        /// The word that was guessed
        word: String,

        /// Result string, one of b/y/g per letter (e.g. bybgb)
        #[arg(short, long)]
        result: Option<String>,

        /// Compute the result against this secret word
        #[arg(long)]
        secret: Option<String>,

        /// Start a new session before recording
        #[arg(long)]
        reset: bool,
    },

    /// Show the session history and the next suggestions (default)
    Show,

    /// Start a new session
    Reset,

    /// Play every dictionary word and summarize the guess counts
    Test {
        /// Only play the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Per-game log file (default: bofhle-<strategy>[-candidate].log)
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

impl Cli {
    fn result_style(&self) -> ResultStyle {
        ResultStyle::from_flags(!self.no_color, !self.no_emoji, self.theme)
    }

    fn suggest_config(&self) -> SuggestConfig {
        SuggestConfig {
            limit: self.top,
            ..SuggestConfig::new(self.strategy, !self.words)
        }
    }

    fn history_store(&self) -> JsonlHistory {
        JsonlHistory::new(self.history.clone().unwrap_or_else(default_history_path))
    }
}

/// Load the dictionary from `--wordlist`, or the embedded one
fn load_dictionary(path: Option<&Path>) -> Result<Vec<Word>> {
    let dictionary = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => default_dictionary(),
    };
    anyhow::ensure!(!dictionary.is_empty(), "the word list has no five-letter words");
    info!("dictionary has {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    // Default to Show if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Show) {
        Commands::Guess {
            word,
            result,
            secret,
            reset,
        } => {
            let source = match (result, secret) {
                (_, Some(secret)) => FeedbackSource::Secret(secret),
                (Some(result), None) => FeedbackSource::Result(result),
                (None, None) => anyhow::bail!("either --result or --secret is required"),
            };
            run_guess_command(&cli, &dictionary, word, source, *reset)
        }
        Commands::Show => run_show_command(&cli, &dictionary),
        Commands::Reset => run_reset_command(&cli),
        Commands::Test { limit, log } => {
            run_test_command(&cli, &dictionary, *limit, log.as_deref())
        }
    }
}

fn run_guess_command(
    cli: &Cli,
    dictionary: &[Word],
    word: &str,
    source: FeedbackSource<'_>,
    reset: bool,
) -> Result<()> {
    let mut store = cli.history_store();
    record_guess(&mut store, dictionary, word, source, reset)?;
    if reset {
        println!("New session started.");
    }
    run_show_command(cli, dictionary)
}

fn run_show_command(cli: &Cli, dictionary: &[Word]) -> Result<()> {
    let store = cli.history_store();
    let report = suggest(&store, dictionary, cli.suggest_config())?;

    print_session(&SessionView {
        history: &report.history,
        candidates: report.candidates.len(),
        strategy: cli.strategy,
        suggestions: &report.suggestions,
        style: cli.result_style(),
    });
    Ok(())
}

fn run_reset_command(cli: &Cli) -> Result<()> {
    let mut store = cli.history_store();
    reset_session(&mut store)?;
    println!("New session started.");
    Ok(())
}

fn run_test_command(
    cli: &Cli,
    dictionary: &[Word],
    limit: Option<usize>,
    log: Option<&Path>,
) -> Result<()> {
    let config = SimulationConfig {
        limit,
        ..SimulationConfig::new(cli.strategy, !cli.words)
    };

    let secrets = limit.map_or(dictionary.len(), |n| n.min(dictionary.len()));
    println!("Playing {secrets} games with {}...", cli.strategy);

    let run = run_simulation(dictionary, &config)?;

    let log_path = log.map_or_else(|| config.default_log_path(), Path::to_path_buf);
    save_report(&run, &log_path)?;

    print_batch_summary(run.strategy, &run.summary, run.elapsed);
    println!("\nLog written to {}", log_path.display());
    Ok(())
}
