//! JSON Lines history file
//!
//! One `{"guess": ..., "result": ...}` object per line, appended in play
//! order. A missing file is an empty history.

use super::{HistoryError, HistoryStore};
use crate::core::GuessRecord;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// History persisted to a JSON Lines file
#[derive(Debug, Clone)]
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistoryStore for JsonlHistory {
    fn append(&mut self, record: &GuessRecord) -> Result<(), HistoryError> {
        let mut line = serde_json::to_string(record).map_err(HistoryError::Encode)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;

        info!(
            "recorded {} {} in {}",
            record.guess,
            record.feedback,
            self.path.display()
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<GuessRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|source| HistoryError::Corrupt {
                    path: self.path.clone(),
                    line: idx + 1,
                    source,
                })
            })
            .collect()
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("cleared history {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bofhle-{name}-{}.jsonl", std::process::id()))
    }

    fn record(guess: &str, result: &str) -> GuessRecord {
        GuessRecord::new(Word::new(guess).unwrap(), result.parse().unwrap())
    }

    #[test]
    fn store_and_load_history() {
        let path = temp_path("store");
        let mut history = JsonlHistory::new(&path);
        history.clear().unwrap();

        history.append(&record("paste", "bybgb")).unwrap();
        history.append(&record("quota", "ggggg")).unwrap();
        let records = history.load_all().unwrap();
        history.clear().unwrap();

        let guesses: Vec<&str> = records.iter().map(|r| r.guess.text()).collect();
        let results: Vec<String> = records.iter().map(|r| r.feedback.to_string()).collect();
        assert_eq!(guesses, ["paste", "quota"]);
        assert_eq!(results, ["bybgb", "ggggg"]);
    }

    #[test]
    fn missing_file_is_empty_history() {
        let history = JsonlHistory::new(temp_path("missing"));
        assert!(history.load_all().unwrap().is_empty());
    }

    #[test]
    fn clear_removes_file() {
        let path = temp_path("clear");
        fs::write(&path, "x").unwrap();

        let mut history = JsonlHistory::new(&path);
        history.clear().unwrap();
        assert!(!path.exists());

        // Clearing twice is fine
        history.clear().unwrap();
    }

    #[test]
    fn corrupt_line_reports_its_number() {
        let path = temp_path("corrupt");
        fs::write(
            &path,
            "{\"guess\":\"paste\",\"result\":\"bybgb\"}\n\n{\"guess\":\"paste\",\"result\":\"nope\"}\n",
        )
        .unwrap();

        let history = JsonlHistory::new(&path);
        let outcome = history.load_all();
        fs::remove_file(&path).unwrap();

        match outcome {
            Err(HistoryError::Corrupt { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected corrupt line error, got {other:?}"),
        }
    }
}
