//! Word list loading utilities
//!
//! Reads custom word pools from disk, one word per line.

use super::WordList;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    /// The source held no usable five-letter words
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Could not read word list: {err}"),
            Self::Empty => write!(f, "Word list contains no five-letter words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parse a word pool from text
///
/// Blank lines, `#` comments and malformed entries are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Empty`] if no valid word remains.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_word_list;
///
/// let list = parse_word_list("# pool\ncrane\n\nslate\nnope\n").unwrap();
/// assert_eq!(list.len(), 2);
/// ```
pub fn parse_word_list(content: &str) -> Result<WordList, WordListError> {
    let list = WordList::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    );

    if list.is_empty() {
        return Err(WordListError::Empty);
    }

    Ok(list)
}

/// Load a word pool from a file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}
