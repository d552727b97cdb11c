//! Word list loading utilities
//!
//! Loads word lists from plain text files (one word per line), from JSON files
//! shaped like `{"words": ["apple", ...]}`, or from embedded constants.
//! Entries that are not valid words are skipped.

use crate::core::Word;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error raised while reading a word list file
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Json(e) => write!(f, "Failed to parse word list JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[derive(Deserialize)]
struct WordFile {
    words: Vec<String>,
}

/// Load words from a plain text file, one word per line
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load words from a JSON file of the form `{"words": [...]}`
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Json`
/// if it is not a word list object.
pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    words_from_json_str(&content)
}

/// Load a word list, choosing the format from the file extension
///
/// `.json` files use the JSON loader, anything else is read line by line.
///
/// # Errors
///
/// Propagates the errors of the selected loader.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_from_json(path)
    } else {
        load_from_file(path)
    }
}

/// Parse a JSON word list
///
/// # Errors
///
/// Returns `LoadError::Json` if the input is not a `{"words": [...]}` object.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_json_str;
///
/// let words = words_from_json_str(r#"{"words": ["Apple", "paper"]}"#).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "apple");
/// ```
pub fn words_from_json_str(json: &str) -> Result<Vec<Word>, LoadError> {
    let file: WordFile = serde_json::from_str(json)?;
    Ok(file.words.iter().filter_map(|s| parse_entry(s)).collect())
}

/// Parse newline-separated words, ignoring blank lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_entry)
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| parse_entry(s)).collect()
}

fn parse_entry(entry: &str) -> Option<Word> {
    match Word::new(entry.trim()) {
        Ok(word) => Some(word),
        Err(e) => {
            log::debug!("skipping word list entry {entry:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_lines_trims_and_skips_blanks() {
        let words = words_from_lines("apple\n\n  Paper \r\nno\nhello\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "paper", "hello"]);
    }

    #[test]
    fn json_word_list() {
        let words = words_from_json_str(r#"{"words": ["apple", "HELLO", "bad", "w0rds"]}"#)
            .unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "hello"]);
    }

    #[test]
    fn json_without_words_field_is_an_error() {
        assert!(matches!(
            words_from_json_str(r#"["apple"]"#),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            words_from_json_str("not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_path("definitely/not/here.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));

        let result = load_from_path("definitely/not/here.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn load_embedded_data_file() {
        let words = load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")).unwrap();
        assert_eq!(words.len(), crate::wordlists::WORDS_COUNT);
    }
}
