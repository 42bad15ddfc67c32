//! Dictionary loading utilities
//!
//! Builds a dictionary from a file or from the embedded word list.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not five ASCII letters are skipped.
/// Order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bofhle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/bofhle.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_words(&content);
    debug!("loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Parse a newline-separated word list, skipping invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use bofhle::wordlists::loader::words_from_slice;
/// use bofhle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["quota", "paste", "bdiff"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "quota");
        assert_eq!(words[1].text(), "paste");
        assert_eq!(words[2].text(), "bdiff");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["quota", "toolong", "abc", "bzip2", "paste"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "quota");
        assert_eq!(words[1].text(), "paste");
    }

    #[test]
    fn parse_words_normalizes_lines() {
        let words = parse_words("  Quota\n\npaste\r\nls\nBDIFF \n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["quota", "paste", "bdiff"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("bofhle-no-such-wordlist.txt");
        assert!(load_from_file(path).is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "bofhle-wordlist-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "mkdir\nrmdir\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "rmdir");
    }
}
