//! Session history persistence
//!
//! The history is an append-only log of guess records, oldest first. The
//! only other mutation is clearing it for a new session.

mod jsonl;

pub use jsonl::JsonlHistory;

use crate::core::GuessRecord;
use std::path::PathBuf;
use thiserror::Error;

/// File name used when no history path is configured
pub const DEFAULT_FILE_NAME: &str = ".bofhle.jsonl";

/// Errors reading or writing the history
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not access history file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode guess record")]
    Encode(#[source] serde_json::Error),
    #[error("corrupt record on line {line} of {path}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered store of guess records
pub trait HistoryStore {
    /// Append a record after all existing ones
    ///
    /// # Errors
    /// Returns `HistoryError` if the record cannot be persisted.
    fn append(&mut self, record: &GuessRecord) -> Result<(), HistoryError>;

    /// Every record, oldest first
    ///
    /// # Errors
    /// Returns `HistoryError` if the stored records cannot be read.
    fn load_all(&self) -> Result<Vec<GuessRecord>, HistoryError>;

    /// Discard every record
    ///
    /// # Errors
    /// Returns `HistoryError` if the stored records cannot be removed.
    fn clear(&mut self) -> Result<(), HistoryError>;
}

/// In-memory history
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    records: Vec<GuessRecord>,
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: &GuessRecord) -> Result<(), HistoryError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<GuessRecord>, HistoryError> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        Ok(())
    }
}

/// `$HOME/.bofhle.jsonl`, or the working directory when `HOME` is unset
#[must_use]
pub fn default_history_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(DEFAULT_FILE_NAME)
}
