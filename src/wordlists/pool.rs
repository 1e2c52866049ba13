//! Word pool with fast membership checks
//!
//! A `WordList` is the game's dictionary: solutions are drawn from it and
//! submissions must be members of it.

use super::embedded::WORDS;
use crate::core::WORD_LENGTH;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Deduplicated pool of lowercase five-letter words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a pool from arbitrary strings
    ///
    /// Entries are trimmed and lowercased; anything that is not exactly five ASCII
    /// letters is skipped, as are duplicates. Insertion order is kept.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_words(["Crane", "slate", "toolong", "crane"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("CRANE"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_ascii_lowercase();
            if word.len() == WORD_LENGTH
                && word.bytes().all(|b| b.is_ascii_lowercase())
                && list.index.insert(word.clone())
            {
                list.words.push(word);
            }
        }
        list
    }

    /// The pool compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// Case-insensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word.to_lowercase().as_str())
    }

    /// Whether `input` may be submitted: exactly five letters and in the pool
    #[must_use]
    pub fn is_valid_guess(&self, input: &str) -> bool {
        input.chars().count() == WORD_LENGTH && self.contains(input)
    }

    /// Draw a word uniformly at random, `None` for an empty pool
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
